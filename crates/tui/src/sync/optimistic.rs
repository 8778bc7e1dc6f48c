//! Local patching of fetched lists after successful mutations.
//!
//! Responsibilities:
//! - Remove deleted entities from the current page and adjust its totals.
//! - Replace individual fields of one entity (ban/unban status).
//! - Track which mutations are in flight so their controls stay disabled.
//!
//! Does NOT handle:
//! - Rolling back. Patches are only applied after the server confirmed success.
//! - Conflict detection. The remote API is the source of truth on next fetch.

use std::collections::HashSet;
use std::hash::Hash;

use gateway_client::models::{ListPage, RedemptionCode, RedemptionStatus, UserRecord};
use gateway_client::{ActivityLevel, DeleteMode};

/// An entity addressable by a stable key.
pub trait Keyed {
    type Key: Eq + Hash + Clone;

    fn key(&self) -> Self::Key;
}

impl Keyed for UserRecord {
    type Key = i64;

    fn key(&self) -> i64 {
        self.id
    }
}

impl Keyed for RedemptionCode {
    type Key = i64;

    fn key(&self) -> i64 {
        self.id
    }
}

/// Remove the given keys from a page.
///
/// `deleted` holds keys the server confirmed, so `total` is decremented by
/// each distinct key whether or not it is on the current page. A confirmation
/// must be applied once: applying it again leaves the items alone but lowers
/// `total` a second time. Returns how many items left the page.
pub fn remove_items<T: Keyed>(page: &mut ListPage<T>, deleted: &[T::Key]) -> usize {
    let deleted: HashSet<&T::Key> = deleted.iter().collect();
    let before = page.items.len();
    page.items.retain(|item| !deleted.contains(&item.key()));
    page.total = page.total.saturating_sub(deleted.len() as u64);
    page.recompute_pages();
    before - page.items.len()
}

/// Apply `f` to the item with the given key. Returns whether it was found.
pub fn patch_item<T: Keyed>(page: &mut ListPage<T>, key: &T::Key, f: impl FnOnce(&mut T)) -> bool {
    match page.items.iter_mut().find(|item| item.key() == *key) {
        Some(item) => {
            f(item);
            true
        }
        None => false,
    }
}

/// Identity of a mutation for in-flight tracking.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MutationKey {
    UserStatus(i64),
    UserDelete(i64),
    UserBatch(ActivityLevel, DeleteMode),
    Whitelist(i64),
    RedemptionDelete(i64),
    RedemptionPurge(RedemptionStatus),
    RedemptionGenerate,
    MonitorConfig,
}

/// Set of mutations whose result has not arrived yet.
#[derive(Debug, Default)]
pub struct PendingMutations {
    keys: HashSet<MutationKey>,
}

impl PendingMutations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a mutation as started. Returns `false` if the same one is already running.
    pub fn try_begin(&mut self, key: MutationKey) -> bool {
        self.keys.insert(key)
    }

    pub fn finish(&mut self, key: &MutationKey) {
        self.keys.remove(key);
    }

    pub fn contains(&self, key: &MutationKey) -> bool {
        self.keys.contains(key)
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gateway_client::UserStatus;

    fn user(id: i64) -> UserRecord {
        UserRecord {
            id,
            username: format!("user{id}"),
            display_name: None,
            group: None,
            status: UserStatus::Active,
            quota: 0,
            used_quota: 0,
            request_count: 0,
            activity: ActivityLevel::Active,
            last_active_at: None,
        }
    }

    fn page(ids: &[i64], total: u64) -> ListPage<UserRecord> {
        let mut page = ListPage::empty(10);
        page.items = ids.iter().copied().map(user).collect();
        page.total = total;
        page.recompute_pages();
        page
    }

    #[test]
    fn test_remove_single_item() {
        let mut page = page(&[1, 2, 3], 23);
        assert_eq!(remove_items(&mut page, &[2]), 1);
        assert_eq!(page.items.iter().map(|u| u.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(page.total, 22);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_remove_counts_ids_off_page_in_total() {
        let mut page = page(&[1, 2], 40);
        assert_eq!(remove_items(&mut page, &[2, 99, 100]), 1);
        assert_eq!(page.total, 37);
    }

    #[test]
    fn test_reapplied_removal_keeps_items_but_counts_total() {
        let mut page = page(&[1, 2, 3], 3);
        remove_items(&mut page, &[2]);
        let items = page.items.clone();
        assert_eq!(page.total, 2);

        assert_eq!(remove_items(&mut page, &[2]), 0);
        assert_eq!(page.items, items);
        assert_eq!(page.total, 1);
    }

    #[test]
    fn test_duplicate_keys_count_once() {
        let mut page = page(&[1, 2], 10);
        assert_eq!(remove_items(&mut page, &[2, 2, 2]), 1);
        assert_eq!(page.total, 9);
    }

    #[test]
    fn test_patch_item_only_touches_match() {
        let mut page = page(&[1, 2], 2);
        assert!(patch_item(&mut page, &2, |u| u.status = UserStatus::Banned));
        assert_eq!(page.items[0].status, UserStatus::Active);
        assert_eq!(page.items[1].status, UserStatus::Banned);
        assert!(!patch_item(&mut page, &7, |u| u.status = UserStatus::Banned));
    }

    #[test]
    fn test_pending_refuses_duplicates() {
        let mut pending = PendingMutations::new();
        assert!(pending.try_begin(MutationKey::UserDelete(7)));
        assert!(!pending.try_begin(MutationKey::UserDelete(7)));
        assert!(pending.try_begin(MutationKey::UserStatus(7)));
        pending.finish(&MutationKey::UserDelete(7));
        assert!(!pending.contains(&MutationKey::UserDelete(7)));
        assert_eq!(pending.len(), 1);
    }
}
