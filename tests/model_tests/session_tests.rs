//! Tests for Session and SharedSave
//!
//! These tests verify:
//! - A rejected load leaves the current save untouched
//! - Export to a sink requires a loaded save
//! - Shared access serializes writes across threads

use std::thread;

use ds2save::format::MAGIC;
use ds2save::io::ByteSource;
use ds2save::{Result, SaveError, SaveModel, Session, SharedSave};

fn blank_save(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    bytes[..4].copy_from_slice(&MAGIC);
    bytes
}

struct MemorySource(&'static str, Vec<u8>);

impl ByteSource for MemorySource {
    fn read(&mut self) -> Result<(String, Vec<u8>)> {
        Ok((self.0.to_string(), self.1.clone()))
    }
}

// =============================================================================
// Session Tests
// =============================================================================

#[test]
fn test_new_session_is_empty() {
    let session = Session::new();

    assert!(!session.is_loaded());
    assert!(matches!(session.current(), Err(SaveError::NoSaveLoaded)));
}

#[test]
fn test_save_as_without_save_fails() {
    let session = Session::new();
    let mut sink: Vec<(String, Vec<u8>)> = Vec::new();

    assert!(matches!(session.save_as(&mut sink), Err(SaveError::NoSaveLoaded)));
    assert!(sink.is_empty());
}

#[test]
fn test_rejected_load_keeps_previous_save() {
    let mut session = Session::new();
    session.open("first.dat", blank_save(0x700)).unwrap();
    session.current_mut().unwrap().set("Macca", 77, None).unwrap();

    let err = session.open("junk.bin", vec![1, 2, 3]).unwrap_err();
    assert!(matches!(err, SaveError::InvalidFormat(_)));

    let current = session.current().unwrap();
    assert_eq!(current.name(), "first.dat");
    assert_eq!(current.get("Macca", None).unwrap(), 77);
}

#[test]
fn test_new_load_replaces_wholesale() {
    let mut session = Session::new();
    session.open("first.dat", blank_save(0x700)).unwrap();
    session.current_mut().unwrap().set("Macca", 77, None).unwrap();

    session.open("second.dat", blank_save(0x700)).unwrap();

    let current = session.current().unwrap();
    assert_eq!(current.name(), "second.dat");
    assert_eq!(current.get("Macca", None).unwrap(), 0);
}

#[test]
fn test_open_from_source_and_save_as() {
    let mut session = Session::new();
    let mut source = MemorySource("DS2.sav", blank_save(0x700));

    let model = session.open_from(&mut source).unwrap();
    model.set("EXP", 1234, Some(2)).unwrap();

    let mut sink: Vec<(String, Vec<u8>)> = Vec::new();
    session.save_as(&mut sink).unwrap();
    session.save_as(&mut sink).unwrap();

    assert_eq!(sink.len(), 2);
    assert_eq!(sink[0].0, "DS2.sav");
    assert_eq!(sink[0].1, sink[1].1);
    let off = 0x7C + 2 * 0x24;
    assert_eq!(&sink[0].1[off..off + 2], &1234u16.to_le_bytes());
}

#[test]
fn test_close() {
    let mut session = Session::new();
    session.open("a.dat", blank_save(16)).unwrap();

    let closed = session.close().unwrap();
    assert_eq!(closed.name(), "a.dat");
    assert!(!session.is_loaded());
}

// =============================================================================
// SharedSave Tests
// =============================================================================

#[test]
fn test_shared_save_concurrent_writers() {
    let shared = SharedSave::new(SaveModel::load("shared.dat", blank_save(0x700)).unwrap());

    let handles: Vec<_> = (0..4usize)
        .map(|i| {
            let shared = shared.clone();
            thread::spawn(move || {
                for v in 0..=40 {
                    shared.set("STR", v, Some(i)).unwrap();
                    let bytes = shared.export();
                    assert_eq!(bytes.len(), 0x700);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    for i in 0..4usize {
        assert_eq!(shared.get("STR", Some(i)).unwrap(), 40);
    }
}

#[test]
fn test_shared_save_with_runs_under_one_lock() {
    let shared = SharedSave::new(SaveModel::load("shared.dat", blank_save(0x700)).unwrap());

    let total = shared.with(|model| {
        model.set("HP", 100, Some(0)).unwrap();
        model.set("MP", 50, Some(0)).unwrap();
        model.get("HP", Some(0)).unwrap() + model.get("MP", Some(0)).unwrap()
    });

    assert_eq!(total, 150);
    assert_eq!(shared.set_input("Macca", "12", None).unwrap(), 12);
    assert_eq!(shared.name(), "shared.dat");
}
