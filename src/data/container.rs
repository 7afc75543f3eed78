// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::data::path::{SensationActionPair, SensorimotorPath};

/// Random-access, non-owning snapshot of a path.
///
/// The snapshot borrows the path immutably, so the path cannot be mutated while a
/// snapshot is alive. Samples are addressed by their position in the path, which is
/// also the tie-break key for neighbour ranking.
#[derive(Debug, Clone, Copy)]
pub struct SensorimotorContainer<'a> {
    pairs: &'a [SensationActionPair],
}

impl<'a> SensorimotorContainer<'a> {
    pub fn snapshot(path: &'a SensorimotorPath) -> Self {
        Self { pairs: path.as_slice() }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a SensationActionPair> {
        self.pairs.get(index)
    }

    /// Samples in path order.
    pub fn iter(&self) -> std::slice::Iter<'a, SensationActionPair> {
        self.pairs.iter()
    }
}

impl<'a> std::ops::Index<usize> for SensorimotorContainer<'a> {
    type Output = SensationActionPair;

    fn index(&self, index: usize) -> &Self::Output {
        &self.pairs[index]
    }
}
