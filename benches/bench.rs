use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use linked_bst::list::List;
use linked_bst::tree::Tree;

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: usize) -> usize {
    2usize.pow(num_levels as u32) - 1
}

/// Builds a tree by inserting values in ascending order. This tree never rebalances so the
/// result is a single right spine.
fn get_unbalanced_tree(num_levels: usize) -> Tree<i32> {
    (0..).take(num_nodes_in_full_tree(num_levels)).collect()
}

/// Builds a tree by inserting values so that, without any rebalancing, every level is full.
fn get_balanced_tree(num_levels: usize) -> Tree<i32> {
    let xs = (0..)
        .take(num_nodes_in_full_tree(num_levels))
        .collect::<Vec<_>>();
    let mut tree = Tree::new();
    fill_balanced_tree(&mut tree, &xs);
    tree
}

/// Recursive helper for [`get_balanced_tree`].
fn fill_balanced_tree(tree: &mut Tree<i32>, xs: &[i32]) {
    if !xs.is_empty() {
        let mid = xs.len() / 2;
        tree.insert(xs[mid]);
        fill_balanced_tree(tree, &xs[..mid]);
        fill_balanced_tree(tree, &xs[mid + 1..]);
    }
}

/// Helper to bench a function on a tree.
/// It creates a group for the given name and closure and runs it against balanced and
/// unbalanced trees of various sizes before finishing the group. The closure gets a fresh copy
/// of the tree every iteration so erasing doesn't carry over.
fn bench_tree(c: &mut Criterion, name: &str, f: impl Fn(&mut Tree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    // Deep unbalanced trees make the quadratic traversals crawl, so stop at 2^11.
    for num_levels in [3, 7, 11] {
        let tree_tests = [
            ("unbalanced", get_unbalanced_tree(num_levels)),
            ("balanced", get_balanced_tree(num_levels)),
        ];
        let largest_element_in_tree = num_nodes_in_full_tree(num_levels) as i32 - 1;
        for (name, tree) in tree_tests {
            let id = BenchmarkId::new(name, largest_element_in_tree);

            group.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut time = std::time::Duration::ZERO;
                    for _ in 0..iters {
                        let mut tree = black_box(tree.clone());
                        let instant = std::time::Instant::now();
                        f(&mut tree, black_box(largest_element_in_tree));
                        time += instant.elapsed();
                    }
                    time
                })
            });
        }
    }

    group.finish();
}

/// Helper to bench a function on lists of various lengths.
fn bench_list(c: &mut Criterion, name: &str, f: impl Fn(&mut List<i32>, usize)) {
    let mut group = c.benchmark_group(name);

    for len in [8usize, 128, 2048] {
        let list: List<i32> = (0..len as i32).collect();
        group.bench_with_input(BenchmarkId::new("list", len), &len, |b, &len| {
            b.iter_custom(|iters| {
                let mut time = std::time::Duration::ZERO;
                for _ in 0..iters {
                    let mut list = black_box(list.clone());
                    let instant = std::time::Instant::now();
                    f(&mut list, black_box(len));
                    time += instant.elapsed();
                }
                time
            })
        });
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_tree(c, "search", |tree, i| {
        let _node = black_box(tree.search(&i));
    });
    bench_tree(c, "search-miss", |tree, i| {
        let _node = black_box(tree.search(&(i + 1)));
    });
    bench_tree(c, "insert", |tree, i| {
        tree.insert(i + 1);
    });
    bench_tree(c, "erase-max", |tree, _| {
        let max = tree.tree_max().ok();
        let _value = black_box(tree.erase(max));
    });
    bench_tree(c, "erase-root", |tree, _| {
        let root = tree.root();
        let _value = black_box(tree.erase(root));
    });
    bench_tree(c, "inorder", |tree, _| {
        let _list = black_box(tree.inorder());
    });

    bench_list(c, "list-get-middle", |list, len| {
        let _value = black_box(list.get(len / 2));
    });
    bench_list(c, "list-insert-middle", |list, len| {
        let _ = black_box(list.insert(0, len / 2));
    });
    bench_list(c, "list-concatenate", |list, _| {
        let _joined = black_box(list.concatenate(list));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
