//! Keybinding reference shown in the help popup.

/// Help text listing global and per-screen keys.
pub fn help_text() -> String {
    [
        "Global",
        "  1-5 / Tab / Shift+Tab   switch screen",
        "  r                       refresh current screen",
        "  i                       cycle refresh interval (dashboard, models)",
        "  j/k or Up/Down          move selection",
        "  ?                       this help",
        "  q / Ctrl+C              quit",
        "",
        "Dashboard",
        "  p                       cycle period (day, week, month)",
        "",
        "Risk Leaderboard",
        "  [ / ]                   narrow / widen window",
        "  m                       cycle ranking metric",
        "  Enter                   analyze selected user",
        "",
        "Users",
        "  b / u                   ban / unban selected user",
        "  d / D                   soft / hard delete selected user",
        "  X                       batch delete by activity",
        "  / s c                   name filter, status filter, clear filters",
        "  n / p (N)               next / previous page",
        "  Enter                   analyze selected user",
        "",
        "Redemptions",
        "  g                       generate codes",
        "  d                       delete selected code",
        "  X                       purge codes by status",
        "  / s c                   name filter, status filter, clear filters",
        "  n / p (N)               next / previous page",
        "",
        "Model Health",
        "  e                       choose monitored models",
        "  x                       stop monitoring selected model",
        "  [ / ]                   narrow / widen window",
        "",
        "Analysis dialog",
        "  [ / ]                   narrow / widen window",
        "  w                       toggle whitelist",
        "  b / u                   ban / unban",
        "  r                       refresh",
        "  Esc                     close",
    ]
    .join("\n")
}
