/// Applies wishlist actions from the tabs to the store and reports the result
use super::{Notice, WishlistAction};
use crate::catalog::Product;
use crate::storage::KeyValueStore;
use crate::wishlist::WishlistStore;
use crate::wishlist_data::{AddOutcome, CandidateError, ToggleOutcome, WishlistCandidate};

fn candidate_from_product(product: &Product) -> Result<WishlistCandidate, CandidateError> {
    Ok(WishlistCandidate::new(&product.title)?
        .with_price(product.price)
        .with_number(product.number.clone())
        .with_theme(product.theme.clone())
        .with_retailer(product.retailer.clone()))
}

pub fn apply_wishlist_action<S: KeyValueStore>(
    store: &mut WishlistStore<S>,
    action: WishlistAction,
) -> Notice {
    let notice = match action {
        WishlistAction::AddText { query, on_added } => match WishlistCandidate::new(&query) {
            Ok(candidate) => match store.add(candidate) {
                AddOutcome::Added(entry) => {
                    let notice = Notice::success(format!("✅ Added to wishlist: {}", entry.query));
                    on_added.emit(entry);
                    notice
                }
                outcome @ AddOutcome::Duplicate(_) => Notice::warning(outcome.message()),
            },
            Err(e) => Notice::warning(e.to_string()),
        },
        WishlistAction::Toggle(product) => match candidate_from_product(&product) {
            Ok(candidate) => match store.toggle(candidate) {
                ToggleOutcome::Added(entry) => {
                    Notice::success(format!("Added to wishlist: {}", entry.query))
                }
                ToggleOutcome::Removed(entry) => {
                    Notice::info(format!("Removed from wishlist: {}", entry.query))
                }
                ToggleOutcome::Duplicate(entry) => {
                    Notice::warning(AddOutcome::Duplicate(entry).message())
                }
            },
            Err(e) => Notice::error(format!("Wishlist error: {}", e)),
        },
        WishlistAction::Remove(id) => match store.remove(&id).removed {
            Some(entry) => Notice::info(format!("🗑️ Removed from wishlist: {}", entry.query)),
            None => Notice::info("Already removed"),
        },
        WishlistAction::Clear => {
            store.refresh();
            if store.is_empty() {
                Notice::info("Wishlist is already empty")
            } else {
                Notice::success(format!("✅ {}", store.clear().message()))
            }
        }
    };

    if store.has_unflushed_changes() {
        Notice::error("Wishlist could not be saved; changes will be lost on reload")
    } else {
        notice
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use yew::Callback;

    use super::*;
    use crate::storage::MemoryStorage;
    use crate::ui::NoticeKind;
    use crate::wishlist_data::WishlistEntry;

    fn add_text(query: &str, added: &Rc<RefCell<Vec<String>>>) -> WishlistAction {
        let added = added.clone();
        WishlistAction::AddText {
            query: query.to_string(),
            on_added: Callback::from(move |entry: WishlistEntry| {
                added.borrow_mut().push(entry.query)
            }),
        }
    }

    #[test]
    fn test_add_text_reports_new_entry() {
        let mut store = WishlistStore::open(MemoryStorage::new());
        let added = Rc::new(RefCell::new(Vec::new()));

        let notice = apply_wishlist_action(&mut store, add_text("Rivendell 10316", &added));

        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(*added.borrow(), vec!["Rivendell 10316".to_string()]);
    }

    #[test]
    fn test_duplicate_add_text_does_not_report_added() {
        let mut store = WishlistStore::open(MemoryStorage::new());
        let added = Rc::new(RefCell::new(Vec::new()));
        apply_wishlist_action(&mut store, add_text("Rivendell 10316", &added));
        added.borrow_mut().clear();

        let notice = apply_wishlist_action(&mut store, add_text("Elves 10316", &added));

        assert_eq!(notice.kind, NoticeKind::Warning);
        assert!(added.borrow().is_empty());
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_blank_add_text_is_rejected() {
        let mut store = WishlistStore::open(MemoryStorage::new());
        let added = Rc::new(RefCell::new(Vec::new()));

        let notice = apply_wishlist_action(&mut store, add_text("   ", &added));

        assert_eq!(notice.kind, NoticeKind::Warning);
        assert!(added.borrow().is_empty());
    }

    #[test]
    fn test_clear_sees_entries_added_elsewhere() {
        let storage = MemoryStorage::new();
        let mut store = WishlistStore::open(storage.clone());
        let mut other = WishlistStore::open(storage.clone());
        other.add(WishlistCandidate::new("Ford GT").unwrap());

        let notice = apply_wishlist_action(&mut store, WishlistAction::Clear);

        assert_eq!(notice.kind, NoticeKind::Success);
        assert!(WishlistStore::open(storage).is_empty());
    }

    #[test]
    fn test_remove_unknown_id() {
        let mut store = WishlistStore::open(MemoryStorage::new());

        let notice = apply_wishlist_action(&mut store, WishlistAction::Remove("wish_0_x".into()));

        assert_eq!(notice, Notice::info("Already removed"));
    }
}
