//! Tests for the file-backed byte source and sink

use std::fs;

use ds2save::format::MAGIC;
use ds2save::io::{ByteSink, ByteSource, FileSink, FileSource};
use ds2save::{Config, SaveError, Session};
use tempfile::TempDir;

fn write_blank_save(dir: &TempDir, name: &str) -> std::path::PathBuf {
    let mut bytes = vec![0u8; 0x700];
    bytes[..4].copy_from_slice(&MAGIC);
    let path = dir.path().join(name);
    fs::write(&path, &bytes).unwrap();
    path
}

#[test]
fn test_file_source_reads_name_and_bytes() {
    let temp = TempDir::new().unwrap();
    let path = write_blank_save(&temp, "DS2.sav");

    let (name, bytes) = FileSource::new(&path).read().unwrap();
    assert_eq!(name, "DS2.sav");
    assert_eq!(bytes.len(), 0x700);
}

#[test]
fn test_missing_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let result = FileSource::new(temp.path().join("nope.sav")).read();
    assert!(matches!(result, Err(SaveError::Io(_))));
}

#[test]
fn test_edit_in_place_with_backup() {
    let temp = TempDir::new().unwrap();
    let path = write_blank_save(&temp, "DS2.sav");
    let original = fs::read(&path).unwrap();

    let mut session = Session::new();
    session
        .open_from(&mut FileSource::new(&path))
        .unwrap()
        .set("Macca", 9999, None)
        .unwrap();

    let config = Config::default();
    let mut sink = FileSink::from_config(&config, &path);
    session.save_as(&mut sink).unwrap();

    let written = fs::read(&path).unwrap();
    assert_eq!(&written[0x6C4..0x6C8], &9999u32.to_le_bytes());
    assert_eq!(fs::read(temp.path().join("DS2.sav.bak")).unwrap(), original);
}

#[test]
fn test_output_dir_without_backup() {
    let temp = TempDir::new().unwrap();
    let path = write_blank_save(&temp, "DS2.sav");
    let out = temp.path().join("edited");

    let config = Config::builder().output_dir(&out).backup(false).build();
    let mut sink = FileSink::from_config(&config, &path);
    assert_eq!(sink.target("DS2.sav"), out.join("DS2.sav"));

    sink.write("DS2.sav", b"Devi").unwrap();
    sink.write("DS2.sav", b"Devi!").unwrap();

    assert_eq!(fs::read(out.join("DS2.sav")).unwrap(), b"Devi!");
    assert!(!out.join("DS2.sav.bak").exists());
}

#[test]
fn test_path_without_file_name_is_invalid_input() {
    let temp = TempDir::new().unwrap();
    let result = FileSource::new(temp.path().join("..")).read();

    match result {
        Err(SaveError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::InvalidInput),
        other => panic!("expected invalid input, got {:?}", other),
    }
}

#[test]
fn test_backup_keeps_first_original() {
    let temp = TempDir::new().unwrap();
    let path = write_blank_save(&temp, "DS2.sav");
    let original = fs::read(&path).unwrap();

    let mut sink = FileSink::new(temp.path(), true);
    assert_eq!(sink.backup_path("DS2.sav"), temp.path().join("DS2.sav.bak"));

    let mut first = original.clone();
    first[0x10] = 1;
    sink.write("DS2.sav", &first).unwrap();

    let mut second = original.clone();
    second[0x10] = 2;
    sink.write("DS2.sav", &second).unwrap();

    assert_eq!(fs::read(&path).unwrap(), second);
    assert_eq!(fs::read(sink.backup_path("DS2.sav")).unwrap(), original);
}
