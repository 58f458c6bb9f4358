//! Property-Based Tests — Store Round-Trip Law
//!
//! Uses `proptest` to verify that writing any array of records and
//! reading it back returns deep-equal content.

use chrono::DateTime;
use proptest::prelude::*;
use tempfile::TempDir;

use tribute_api::domain::records::Wish;
use tribute_api::store::CollectionStore;

/// Arbitrary wish with a valid millisecond timestamp and any unicode
/// message (including empty, quotes, and control characters).
fn arb_wish() -> impl Strategy<Value = Wish> {
    (0i64..4_102_444_800_000i64, ".*").prop_map(|(millis, message)| Wish {
        id: millis,
        message,
        date: DateTime::from_timestamp_millis(millis).unwrap(),
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// write(records) followed by read() is deep-equal for any records.
    #[test]
    fn write_then_read_round_trips(records in proptest::collection::vec(arb_wish(), 0..16)) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let result: Result<(), TestCaseError> = rt.block_on(async {
            let dir = TempDir::new().unwrap();
            let store = CollectionStore::new(dir.path());

            store.wishes.write(&records).await.unwrap();
            let read_back = store.wishes.read().await;
            prop_assert_eq!(&read_back, &records);

            // A second read returns the same content again.
            let again = store.wishes.read().await;
            prop_assert_eq!(&again, &records);
            Ok(())
        });
        result?;
    }
}
