use bintree::tree::{Node, Tree};

use std::collections::BTreeSet;

fn less(a: &i8, b: &i8) -> bool {
    a < b
}

/// Builds a tree over `xs`, upserting duplicates away.
fn filled(xs: &[i8]) -> Tree<i8, fn(&i8, &i8) -> bool> {
    let mut tree = Tree::new(less as fn(&i8, &i8) -> bool);
    for x in xs {
        tree.upsert(Node::new(*x));
    }
    tree
}

/// After any sequence of upserts, the in-order walk visits exactly the
/// distinct values, in descending order (greater payloads hang left).
#[quickcheck]
fn in_order_visits_distinct_values_descending(xs: Vec<i8>) -> bool {
    let mut tree = filled(&xs);

    let mut seen = Vec::new();
    tree.traverse_in_order(|n| seen.push(n.payload));

    let expected: Vec<_> = xs.iter().copied().collect::<BTreeSet<_>>().into_iter().rev().collect();
    seen == expected
}

/// The reverse walk is the exact mirror of the in-order walk.
#[quickcheck]
fn reverse_mirrors_in_order(xs: Vec<i8>) -> bool {
    let mut tree = filled(&xs);

    let mut forward = Vec::new();
    tree.traverse_in_order(|n| forward.push(n.payload));
    let mut backward = Vec::new();
    tree.traverse_reverse(|n| backward.push(n.payload));

    forward.reverse();
    forward == backward
}

/// Upserting a value a second time never inserts and always lands on the
/// node the first upsert created.
#[quickcheck]
fn upsert_is_idempotent(xs: Vec<i8>) -> bool {
    let mut tree = filled(&xs);

    xs.iter().all(|x| {
        let (node, inserted) = tree.upsert(Node::new(*x));
        !inserted && node.payload == *x
    })
}

/// Each traversal calls the visitor exactly once per distinct value.
#[quickcheck]
fn visitor_runs_once_per_node(xs: Vec<i8>) -> bool {
    let mut tree = filled(&xs);
    let distinct = xs.iter().collect::<BTreeSet<_>>().len();

    let mut in_order = 0usize;
    tree.traverse_in_order(|_| in_order += 1);
    let mut reverse = 0usize;
    tree.traverse_reverse(|_| reverse += 1);

    in_order == distinct && reverse == distinct
}

/// Payload edits made through upsert's handle are visible to later walks.
#[quickcheck]
fn counting_duplicates_matches_a_naive_count(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new(|a: &(i8, usize), b: &(i8, usize)| a.0 < b.0);
    for x in &xs {
        let (found, _) = tree.upsert(Node::new((*x, 0)));
        found.payload.1 += 1;
    }

    let mut ok = true;
    tree.traverse_in_order(|n| {
        let naive = xs.iter().filter(|x| **x == n.payload.0).count();
        ok &= n.payload.1 == naive;
    });
    ok
}
