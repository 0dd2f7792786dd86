use ordered_tree::{Traversal, Tree};
use quickcheck_macros::quickcheck;

use crate::Op;

fn tree_of(xs: &[i8]) -> Tree<i8> {
    let mut tree = Tree::new(i8::cmp);
    for &x in xs {
        tree.insert(x);
    }
    tree
}

fn in_order(tree: &Tree<i8>) -> Vec<i8> {
    let mut out = Vec::new();
    tree.traverse(Traversal::InOrder, |x| {
        out.push(*x);
        true
    });
    out
}

/// Applies a set of operations to a tree and a plain multiset (a `Vec`).
/// This way we can ensure that after a random smattering of inserts and
/// deletes the tree holds exactly the keys the model holds. Returns false
/// as soon as a delete disagrees with the model about the key's presence.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, model: &mut Vec<i8>) -> bool {
    for op in ops {
        match *op {
            Op::Insert(k) => {
                tree.insert(k);
                model.push(k);
            }
            Op::Delete(k) => {
                let removed = tree.delete(&k);
                match model.iter().position(|&x| x == k) {
                    Some(pos) => {
                        if !removed {
                            return false;
                        }
                        model.swap_remove(pos);
                    }
                    None => {
                        if removed {
                            return false;
                        }
                    }
                }
            }
        }
    }
    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new(i8::cmp);
    let mut model = Vec::new();

    if !do_ops(&ops, &mut tree, &mut model) {
        return false;
    }

    model.sort_unstable();
    in_order(&tree) == model
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    in_order(&tree).windows(2).all(|pair| pair[0] <= pair[1])
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    xs.iter().all(|x| tree.find(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    use std::collections::HashSet;

    let tree = tree_of(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x) == None)
}

#[quickcheck]
fn delete_removes_one_instance_per_call(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = tree_of(&xs);

    let mut still_present = xs;
    for delete in &deletes {
        let removed = tree.delete(delete);
        match still_present.iter().position(|x| x == delete) {
            Some(pos) => {
                if !removed {
                    return false;
                }
                still_present.swap_remove(pos);
            }
            None => {
                if removed {
                    return false;
                }
            }
        }
    }

    still_present.sort_unstable();
    in_order(&tree) == still_present
}

#[quickcheck]
fn reverse_in_order_is_reversed_in_order(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);

    let mut reversed = Vec::new();
    tree.traverse(Traversal::ReverseInOrder, |x| {
        reversed.push(*x);
        true
    });
    reversed.reverse();

    in_order(&tree) == reversed
}

#[quickcheck]
fn every_order_visits_every_node(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let orders = [
        Traversal::InOrder,
        Traversal::ReverseInOrder,
        Traversal::PreOrder,
        Traversal::PostOrder,
    ];

    orders.iter().all(|&order| tree.traverse(order, |_| true) == xs.len())
}

#[quickcheck]
fn pre_order_parents_precede_post_order_parents_follow(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);

    // The root is the first element of a pre-order walk and the last of a
    // post-order walk; in-order keeps it between its subtrees. Checking the
    // boundary element pins each order without reconstructing the shape.
    let mut pre = Vec::new();
    tree.traverse(Traversal::PreOrder, |x| {
        pre.push(*x);
        true
    });
    let mut post = Vec::new();
    tree.traverse(Traversal::PostOrder, |x| {
        post.push(*x);
        true
    });

    match xs.first() {
        None => pre.is_empty() && post.is_empty(),
        // The first insertion is the root for the whole tree's lifetime
        // here, since nothing rebalances.
        Some(root) => pre.first() == Some(root) && post.last() == Some(root),
    }
}
