//! Reads whitespace-delimited words from stdin and prints how often each one
//! occurred, one `count word` pair per line. Duplicate words collapse onto a
//! single tree node whose counter is bumped through the handle that
//! [`Tree::upsert`] returns.

use std::env;
use std::fmt::Write as _;
use std::io::{self, BufRead};
use std::process;

use anyhow::Result;

use bintree::tree::{Node, Tree};

/// The payload of a node: a word and how many times it was seen.
struct WordCount {
    word: String,
    count: u64,
}

fn main() -> Result<()> {
    // No flags, no input files. Anything on the command line is a mistake.
    if env::args().len() != 1 {
        eprintln!("usage: wordcount (reads from stdin, shows words and their frequencies)");
        process::exit(2);
    }

    let mut tree = Tree::new(|a: &WordCount, b: &WordCount| a.word < b.word);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        for word in line?.split_whitespace() {
            // A fresh node starts at zero and a found node carries its
            // running total; incrementing through the handle covers both.
            let (found, _) = tree.upsert(Node::new(WordCount {
                word: word.to_string(),
                count: 0,
            }));
            found.payload.count += 1;
        }
    }

    let mut out = String::new();
    tree.traverse_in_order(|n| {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{} {}", n.payload.count, n.payload.word);
    });
    print!("{}", out);

    Ok(())
}
