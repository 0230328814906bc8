///! Some utility functions

use minidom::Element;

use crate::list::TaskListView;
use crate::role::ControlSet;

/// Walks an XML tree until it finds an element with the given `id` attribute
pub fn find_elem_by_id<'a, S: AsRef<str>>(root: &'a Element, searched_id: S) -> Option<&'a Element> {
    let searched_id = searched_id.as_ref();
    if root.attr("id") == Some(searched_id) {
        return Some(root);
    }

    for el in root.children() {
        if el.attr("id") == Some(searched_id) {
            return Some(el);
        } else {
            let ret = find_elem_by_id(el, searched_id);
            if ret.is_some() {
                return ret;
            }
        }
    }
    None
}

/// Walks an XML tree and returns every element that carries the given class token
pub fn find_elems_by_class<'a, S: AsRef<str>>(root: &'a Element, searched_class: S) -> Vec<&'a Element> {
    let searched_class = searched_class.as_ref();
    let mut elems: Vec<&Element> = Vec::new();

    for el in root.children() {
        if has_class(el, searched_class) {
            elems.push(el);
        } else {
            let ret = find_elems_by_class(el, searched_class);
            elems.extend(ret);
        }
    }
    elems
}

/// Tells whether the `class` attribute of an element contains the given token
pub fn has_class(el: &Element, searched_class: &str) -> bool {
    match el.attr("class") {
        None => false,
        Some(classes) => classes.split_whitespace().any(|class| class == searched_class),
    }
}

/// A debug utility that pretty-prints a rendered task list
pub fn print_task_list(list: &TaskListView) {
    for row in list.rows() {
        let edit = if row.controls().contains(ControlSet::EDIT) { "e" } else { " " };
        let delete = if row.controls().contains(ControlSet::DELETE) { "d" } else { " " };
        println!("    [{}{}] {}\t(task {})", edit, delete, row.details(), row.task_id());
    }
}
