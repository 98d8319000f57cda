// src/manifest.rs

//! Count-and-listing of rendered characters, used to reconcile sequential
//! filenames with the characters they hold.

use std::io::{self, Write};

/// The characters of a run, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub count: usize,
    pub lines: Vec<char>,
}

/// Buffers `characters` into a manifest.
pub fn emit_manifest(characters: &[char]) -> Manifest {
    Manifest {
        count: characters.len(),
        lines: characters.to_vec(),
    }
}

impl Manifest {
    /// Writes the count on the first line, then one UTF-8 character per line.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "{}", self.count)?;
        for ch in &self.lines {
            writeln!(out, "{}", ch)?;
        }
        out.flush()
    }
}
