//! Shared fixtures: an in-memory row store and point/group builders.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use wellspacing::{DataPoint, GroupItem, LayerType, MarkMode, RowHandle, RowRef};

/// Minimal in-memory row. A real host replaces the whole marking on
/// `Replace`; these rows are independent, which is enough for testing which
/// rows received which command.
pub struct TestRow {
    marked: Cell<bool>,
}

impl TestRow {
    pub fn new(marked: bool) -> Rc<Self> {
        Rc::new(Self {
            marked: Cell::new(marked),
        })
    }
}

impl RowHandle for TestRow {
    fn is_marked(&self) -> bool {
        self.marked.get()
    }

    fn mark(&self, mode: MarkMode) {
        match mode {
            MarkMode::Replace => self.marked.set(true),
            MarkMode::Toggle => self.marked.set(!self.marked.get()),
            MarkMode::Subtract => self.marked.set(false),
        }
    }
}

pub fn point(x: f64, y: f64, layer_type: LayerType, row: Rc<TestRow>) -> DataPoint {
    let row: RowRef = row;
    DataPoint {
        x,
        y,
        size: None,
        color: None,
        name: None,
        layer_type,
        row,
    }
}

pub fn well(x: f64, y: f64) -> DataPoint {
    point(x, y, LayerType::Wells, TestRow::new(false))
}

pub fn formation_point(x: f64, y: f64) -> DataPoint {
    point(x, y, LayerType::Formation, TestRow::new(false))
}

pub fn wells_group(name: &str, points: Vec<DataPoint>) -> GroupItem {
    GroupItem::new(name, LayerType::Wells, points)
}

pub fn formation_group(name: &str, points: Vec<DataPoint>) -> GroupItem {
    GroupItem::new(name, LayerType::Formation, points)
}
