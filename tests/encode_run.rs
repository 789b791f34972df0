use std::fs;
use std::path::Path;

use patchcrypt::app::encode;
use patchcrypt::cipher::CipherContext;
use patchcrypt::config::Config;
use patchcrypt::naming::{decode_name, encode_name};
use patchcrypt::reveal::reveal;
use tempfile::tempdir;

const REIMAGINED: &str = "ComplementaryReimagined_r5.5.1 + EuphoriaPatches_1.6.3.zip";

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir).unwrap().map(|e| e.unwrap().file_name().to_string_lossy().into_owned()).collect();
    names.sort();
    names
}

#[test]
fn test_end_to_end_single_style() {
    let base = tempdir().unwrap();
    let source = base.path().join("SourceFolder");
    fs::create_dir_all(&source).unwrap();
    let archive = b"PK\x03\x04 shader pack contents".to_vec();
    fs::write(source.join(REIMAGINED), &archive).unwrap();
    fs::write(source.join("ComplementaryReimagined_r5.5.1 + EuphoriaPatches_1.6.2.zip"), b"stale").unwrap();

    let config = Config::with_base_dir(base.path());
    let summary = encode(&config).unwrap();
    assert!(summary.found_any());

    let cipher = CipherContext::new(&config.key, &config.iv).unwrap();
    let expected = cipher.encrypt(&archive);
    let name = encode_name(REIMAGINED);

    let destination = base.path().join("DestinationFolder");
    assert_eq!(fs::read(destination.join("common").join(&name)).unwrap(), expected);
    assert_eq!(fs::read(destination.join("Reimagined").join("_1.6.3").join(&name)).unwrap(), expected);
    assert!(file_names(&destination.join("Unbound").join("_1.6.3")).is_empty());

    assert_eq!(file_names(&source), vec![REIMAGINED.to_owned()]);
    assert_eq!(decode_name(&name).unwrap(), REIMAGINED);
}

#[test]
fn test_empty_source_clears_common_and_writes_nothing() {
    let base = tempdir().unwrap();
    let common = base.path().join("DestinationFolder").join("common");
    fs::create_dir_all(&common).unwrap();
    fs::write(common.join("previous-build"), b"old ciphertext").unwrap();

    let summary = encode(&Config::with_base_dir(base.path())).unwrap();

    assert!(!summary.found_any());
    assert!(file_names(&common).is_empty());
    assert!(file_names(&base.path().join("SourceFolder")).is_empty());
    assert!(file_names(&base.path().join("DestinationFolder").join("Reimagined").join("_1.6.3")).is_empty());
}

#[test]
fn test_rerun_replaces_common_output() {
    let base = tempdir().unwrap();
    let config = Config::with_base_dir(base.path());
    let source = base.path().join("SourceFolder");
    fs::create_dir_all(&source).unwrap();
    fs::write(source.join(REIMAGINED), b"first").unwrap();
    encode(&config).unwrap();

    fs::remove_file(source.join(REIMAGINED)).unwrap();
    let unbound = "ComplementaryUnbound_r5.5.1 + EuphoriaPatches_1.6.3.zip";
    fs::write(source.join(unbound), b"second").unwrap();
    encode(&config).unwrap();

    let common = base.path().join("DestinationFolder").join("common");
    assert_eq!(file_names(&common), vec![encode_name(unbound)]);
    assert!(base.path().join("DestinationFolder").join("Reimagined").join("_1.6.3").join(encode_name(REIMAGINED)).exists());
}

#[test]
fn test_reveal_inverts_encode_output() {
    let base = tempdir().unwrap();
    let config = Config::with_base_dir(base.path());
    let source = base.path().join("SourceFolder");
    fs::create_dir_all(&source).unwrap();
    fs::write(source.join(REIMAGINED), b"archive payload").unwrap();
    encode(&config).unwrap();

    let cipher = CipherContext::new(&config.key, &config.iv).unwrap();
    let encoded = base.path().join("DestinationFolder").join("common").join(encode_name(REIMAGINED));
    let out = tempdir().unwrap();
    let revealed = reveal(&cipher, &encoded, out.path()).unwrap();

    assert_eq!(revealed, out.path().join(REIMAGINED));
    assert_eq!(fs::read(revealed).unwrap(), b"archive payload");
}
