//! Tests for the extension utilities through the public API.

use tinge::ext::{
    clear_dir, ensure_subdir, error_chain, random_string, to_value_map, ByteSizeExt, ByteSliceExt,
    IteratorExt, StringExt, ValueMapExt,
};

// ============================================================================
// Strings
// ============================================================================

#[test]
fn slugify_produces_url_friendly_names() {
    assert_eq!("Crème Brûlée Recipe!".slugify(), "creme-brulee-recipe");
}

#[test]
fn md5_hex_is_stable() {
    assert_eq!(
        "The quick brown fox jumps over the lazy dog".md5_hex(),
        "9e107d9d372bb6826bd81d3542a419d6"
    );
}

#[test]
fn or_if_blank_combines_with_other_helpers() {
    let title = "   ".or_if_blank(|| random_string(8));
    assert_eq!(title.len(), 8);
}

// ============================================================================
// Bytes
// ============================================================================

#[test]
fn data_url_round_trips_through_base64() {
    let url = b"\x89PNG".to_data_url("image/png");
    assert!(url.starts_with("data:image/png;base64,"));
}

#[test]
fn byte_sizes_are_human_readable() {
    assert_eq!((2 * 1024 * 1024u64).to_byte_size(), "2 MB");
}

// ============================================================================
// Iterators
// ============================================================================

#[test]
fn duplicates_finds_repeated_entries() {
    let lines = ["a", "b", "a", "c", "b"];
    let dupes: Vec<_> = lines.into_iter().duplicates().collect();
    assert_eq!(dupes, vec!["a", "b"]);
}

// ============================================================================
// Maps
// ============================================================================

#[test]
fn structs_flatten_into_value_maps() {
    #[derive(serde::Serialize)]
    struct Job {
        id: u64,
        name: String,
    }

    let map = to_value_map(&Job {
        id: 12,
        name: "render".to_string(),
    })
    .unwrap();
    assert_eq!(map.get_as::<u64>("id"), Some(12));
    assert_eq!(map.get_as::<String>("name"), Some("render".to_string()));
}

// ============================================================================
// Paths
// ============================================================================

#[test]
fn ensure_subdir_and_clear_dir_work_together() {
    let temp = tempfile::tempdir().unwrap();
    let sub = ensure_subdir(temp.path(), "work").unwrap();
    std::fs::write(sub.join("scratch.txt"), b"data").unwrap();

    clear_dir(&sub).unwrap();
    assert!(sub.is_dir());
    assert_eq!(std::fs::read_dir(&sub).unwrap().count(), 0);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn error_chain_includes_io_sources() {
    let inner = std::io::Error::new(std::io::ErrorKind::NotFound, "missing file");
    let outer = anyhow::Error::from(inner).context("loading session");
    let flattened = error_chain(outer.as_ref());
    assert!(flattened.contains("loading session"));
    assert!(flattened.contains("missing file"));
}
