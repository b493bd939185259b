use tarot_draw::{Clock, DrawPhase, QuotaBackend, QuotaStore, STORAGE_KEY};
use tarot_web::clock::BrowserClock;
use tarot_web::storage::LocalStorageBackend;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn local_storage_round_trips_record() {
    let backend = LocalStorageBackend;
    backend.write(STORAGE_KEY, "").expect("write");
    let store = QuotaStore::new(backend);
    assert_eq!(store.load(), None);

    let today = tarot_draw::current_date(&BrowserClock);
    let record = store.commit_draw(&today, 5);
    assert_eq!(record.count, 1);
    assert_eq!(store.load(), Some(record));
}

#[wasm_bindgen_test]
fn corrupt_local_storage_reads_as_empty() {
    let backend = LocalStorageBackend;
    backend.write(STORAGE_KEY, "{broken").expect("write");
    assert_eq!(QuotaStore::new(backend).load(), None);
}

#[wasm_bindgen_test]
fn browser_clock_is_after_epoch() {
    assert!(BrowserClock.now().timestamp() > 0);
}

#[wasm_bindgen_test]
fn controller_starts_idle() {
    let controller = tarot_web::app::build_controller();
    assert_eq!(controller.phase(), DrawPhase::Idle);
}
