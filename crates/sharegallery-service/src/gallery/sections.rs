//! Folder-section building for gallery display.
//!
//! A flat list of files with slash-delimited names is grouped into
//! sections, one per folder that directly holds files. Sections come out
//! in depth-first order with sibling folders sorted by name, and chains of
//! folders that hold no files and exactly one sub-folder are merged into a
//! single multi-segment heading (`trip/day1` rather than `trip` then
//! `day1`).
//!
//! Names are split on `/` and nothing else is validated: empty segments
//! (from a leading `/`, a doubled `//` or a trailing `/`) become folders
//! named by the empty string. Sibling folders are ordered byte-wise, so
//! the output does not depend on the host locale.

use std::collections::BTreeMap;

use sharegallery_entity::file::FileRecord;
use sharegallery_entity::section::Section;

/// A folder of the implied directory tree.
struct TreeNode<T> {
    /// Files held directly by this folder, in input order.
    files: Vec<T>,
    /// Sub-folders keyed by segment name; `BTreeMap` keeps them sorted.
    children: BTreeMap<String, TreeNode<T>>,
}

impl<T> Default for TreeNode<T> {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            children: BTreeMap::new(),
        }
    }
}

/// Groups files into sections by the folder part of their `name`.
pub fn build_sections(files: &[FileRecord]) -> Vec<Section> {
    build_sections_by(files, |file| file.name.as_str())
}

/// Groups records into sections by the folder part of the path returned
/// by `path_of`.
///
/// Records are cloned into the output unchanged, so the key may differ
/// from anything the record itself displays (archive galleries key images
/// by their path inside the archive but keep the full name).
pub fn build_sections_by<T, F>(records: &[T], path_of: F) -> Vec<Section<T>>
where
    T: Clone,
    F: Fn(&T) -> &str,
{
    let mut root = TreeNode::default();

    for record in records {
        let mut folders: Vec<&str> = path_of(record).split('/').collect();
        folders.pop();

        let mut node = &mut root;
        for folder in folders {
            node = node.children.entry(folder.to_string()).or_default();
        }
        node.files.push(record.clone());
    }

    let mut sections = Vec::new();
    traverse(root, "", &mut sections);
    sections
}

fn traverse<T>(node: TreeNode<T>, prefix: &str, sections: &mut Vec<Section<T>>) {
    if !node.files.is_empty() {
        sections.push(Section {
            path: prefix.to_string(),
            files: node.files,
        });
    }

    for (name, child) in node.children {
        let mut path = name;
        let mut current = child;

        while current.files.is_empty() && current.children.len() == 1 {
            let Some((next_name, next)) = current.children.pop_first() else {
                break;
            };
            path.push('/');
            path.push_str(&next_name);
            current = next;
        }

        let full_path = if prefix.is_empty() {
            path
        } else {
            format!("{prefix}/{path}")
        };
        traverse(current, &full_path, sections);
    }
}
