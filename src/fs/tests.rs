#![cfg(test)]

use std::fs;

use tempfile::TempDir;

use super::*;

fn scratch() -> TempDir {
    tempfile::tempdir().unwrap()
}

#[test]
fn test_write_then_read() {
    let dir = scratch();
    let path = dir.path().join("write_then_read.txt");
    let contents = "first line\nsecond line, with ünïcödé\n";
    write_string_to_file(contents, &path).unwrap();
    assert_eq!(read_file_to_string(&path).unwrap(), contents);

    write_string_to_file("short", &path).unwrap();
    assert_eq!(
        read_file_to_string(&path).unwrap(),
        "short",
        "Writing should replace the previous contents."
    );

    write_string_to_file("", &path).unwrap();
    assert_eq!(read_file_to_string(&path).unwrap(), "");
}

#[test]
fn test_missing_file() {
    let dir = scratch();
    let err = read_file_to_string(dir.path().join("does_not_exist.txt")).unwrap_err();
    let FileError::Os(os) = &err else {
        panic!("expected an OS error, got {err:?}");
    };
    assert_eq!(os.code, libc::ENOENT);
    assert_eq!(os.name, "ENOENT");
    assert!(err.to_string().ends_with("(ENOENT)"), "{err}");
}

#[test]
fn test_write_to_directory() {
    let dir = scratch();
    let err = write_string_to_file("x", dir.path()).unwrap_err();
    assert!(err.is_os(), "{err:?}");
    let os: OsError = err.try_into().unwrap();
    assert_eq!(os.code, libc::EISDIR);
    assert_eq!(os.name, "EISDIR");
}

#[test]
fn test_invalid_utf8() {
    let dir = scratch();
    let path = dir.path().join("invalid_utf8.bin");
    fs::write(&path, b"ok\xff\xfe").unwrap();
    assert_eq!(
        read_file_to_string(&path),
        Err(FileError::InvalidUtf8(InvalidUtf8 { valid_up_to: 2 }))
    );
}

#[test]
fn test_nul_in_path() {
    assert_eq!(
        read_file_to_string("bad\0path"),
        Err(FileError::InvalidPath(InvalidPath))
    );
}

#[test]
fn test_save_ascii() {
    let dir = scratch();
    let path = dir.path().join("save_ascii.txt");
    save_ascii(&path, &[1.5, -2.0, 3.25]).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "1.5\n-2\n3.25\n");

    save_ascii::<_, u8>(&path, &[]).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn test_save_ascii_matrix() {
    let dir = scratch();
    let path = dir.path().join("save_ascii_matrix.txt");
    let data = [[1, 2, 3], [4, 5, 6]];
    let reader = MatrixReader::new(2, 3, |r: usize, c: usize| data[r][c]);
    assert_eq!((reader.rows(), reader.cols()), (2, 3));

    save_ascii_matrix(&path, &reader).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "1 2 3\n4 5 6\n");

    let transposed = MatrixReader::new(3, 2, |r: usize, c: usize| data[c][r] as f64 / 2.0);
    save_ascii_matrix(&path, &transposed).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "0.5 2\n1 2.5\n1.5 3\n");
}
