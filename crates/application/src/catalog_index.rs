use std::path::Path;

use asset_shelf_domain::{is_hidden, CatalogNode, CategorySelection};

use crate::FolderTree;

/// Category list for `root`: the `All` wildcard followed by every folder,
/// sorted by name. Recomputed on every call.
pub fn categories_of(folders: &dyn FolderTree, root: &Path) -> Vec<CatalogNode> {
    with_wildcard(folders.child_folders(root))
}

pub fn subcategories_of(
    folders: &dyn FolderTree,
    root: &Path,
    category: &CategorySelection,
) -> Vec<CatalogNode> {
    match category {
        CategorySelection::All => vec![CatalogNode::no_subcategory()],
        CategorySelection::Named(name) => with_wildcard(folders.child_folders(&root.join(name))),
    }
}

fn with_wildcard(mut names: Vec<String>) -> Vec<CatalogNode> {
    names.retain(|name| !is_hidden(name));
    names.sort();

    let mut nodes = Vec::with_capacity(names.len() + 1);
    nodes.push(CatalogNode::all());
    nodes.extend(names.into_iter().map(CatalogNode::named));
    nodes
}
