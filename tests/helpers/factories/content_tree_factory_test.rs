use super::ContentTreeFactory;
use std::fs;

#[test]
fn test_content_tree_factory_lays_out_root() {
    let tree = ContentTreeFactory::new()
        .with_entry("basics:syntax", "c2")
        .with_entry("introduction", "c1")
        .with_old_file("introduction/index.md", "# Intro")
        .with_new_file("intro@c1.md", "")
        .create();

    assert_eq!(tree.read_old("introduction/index.md"), "# Intro");
    assert_eq!(tree.read_new("intro@c1.md"), "");

    let mapping = fs::read_to_string(tree.root().join("migration-mapping.json")).unwrap();
    let syntax = mapping.find("basics:syntax").unwrap();
    let intro = mapping.find("introduction").unwrap();
    assert!(syntax < intro);
}

#[test]
fn test_content_tree_factory_without_content_dir() {
    let tree = ContentTreeFactory::new().without_content_dir().create();

    assert!(!tree.root().join("content").exists());
    assert!(tree.root().join("content-old").is_dir());
}
