use capped_bst::Tree;

use std::collections::HashSet;

use crate::Op;

/// Applies a set of operations to a tree and a hashset.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, set: &mut HashSet<K>)
where
    K: std::hash::Hash + Eq + Clone + Ord,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst.insert(k.clone());
                set.insert(k.clone());
            }
            Op::Delete(k) => {
                bst.delete(k);
                set.remove(k);
            }
        }
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        // i8 has 256 values so the tree can never fill up.
        let mut tree = Tree::with_capacity(256);
        let mut set = HashSet::new();

        do_ops(&ops, &mut tree, &mut set);
        tree.len() == set.len() && set.iter().all(|key| tree.contains(key))
    }

    fn ascending(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::with_capacity(256);
        let mut set = HashSet::new();
        do_ops(&ops, &mut tree, &mut set);

        let mut walked = Vec::new();
        tree.traverse(|key| walked.push(*key));
        walked.windows(2).all(|pair| pair[0] < pair[1]) && walked.len() == tree.len()
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let mut tree = Tree::with_capacity(256);
        for x in &xs {
            tree.insert(*x);
        }
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.contains(x))
    }

    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = Tree::with_capacity(256);
        for x in &xs {
            tree.insert(*x);
        }
        for delete in &deletes {
            tree.delete(delete);
        }

        let mut still_present = xs;
        for delete in &deletes {
            // We may have inserted the same value multiple times - delete each one.
            while let Some(pos) = still_present.iter().position(|x| x == delete) {
                still_present.swap_remove(pos);
            }
        }

        deletes.iter().all(|x| !tree.contains(x))
            && still_present.iter().all(|x| tree.contains(x))
    }

    fn duplicates_do_not_change_len(xs: Vec<i8>) -> bool {
        let mut tree = Tree::with_capacity(256);
        for x in &xs {
            tree.insert(*x);
        }
        let len = tree.len();

        xs.iter().all(|x| !tree.insert(*x)) && tree.len() == len
    }

    fn capacity_is_never_exceeded(xs: Vec<u8>, capacity: u8) -> bool {
        let capacity = usize::from(capacity);
        let mut tree = Tree::with_capacity(capacity);
        let mut accepted = 0;
        for x in &xs {
            if tree.insert(*x) {
                accepted += 1;
            }
        }

        let distinct = xs.iter().collect::<HashSet<_>>().len();
        tree.len() == accepted && accepted == distinct.min(capacity)
    }
}
