use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rbset::RBTree;
use simplelog::{Config, LevelFilter, TestLogger};

fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Debug, Config::default());
}

fn height_bound(len: usize) -> f64 {
    2.0 * ((len + 1) as f64).log2()
}

#[test]
fn insert_10_20_30_15_colors() {
    init_logging();
    let mut tree = RBTree::new();
    for k in [10, 20, 30, 15] {
        assert!(tree.insert(k));
    }

    let colored: Vec<String> = tree
        .iter_colored()
        .map(|(k, c)| format!("{k} {c}"))
        .collect();
    assert_eq!(colored, vec!["10 BLACK", "15 RED", "20 BLACK", "30 BLACK"]);
    assert!(tree.validate());
    assert_eq!(tree.black_height(), 2);
}

#[test]
fn ascending_one_to_seven() {
    init_logging();
    let mut tree = RBTree::new();
    for k in 1..=7 {
        assert!(tree.insert(k));
        assert!(tree.validate(), "invalid after inserting {k}\n{tree}");
    }
    assert!(tree.height() <= 4);
    assert_eq!(tree.traverse(), vec![&1, &2, &3, &4, &5, &6, &7]);
}

#[test]
fn random_permutation_build_and_teardown() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(0x5eed_1000);

    let mut inserts: Vec<u32> = (1..=1000).collect();
    inserts.shuffle(&mut rng);
    let mut deletes = inserts.clone();
    deletes.shuffle(&mut rng);
    assert_ne!(inserts, deletes);

    let mut tree = RBTree::new();
    for (i, &k) in inserts.iter().enumerate() {
        assert!(tree.insert(k));
        assert!(tree.validate(), "invalid after inserting {k}");
        assert_eq!(tree.len(), i + 1);
        assert!(tree.height() as f64 <= height_bound(tree.len()));
    }

    for (i, &k) in deletes.iter().enumerate() {
        assert!(tree.delete(&k));
        assert!(tree.validate(), "invalid after deleting {k}");
        assert!(!tree.contains(&k));
        assert_eq!(tree.len(), 1000 - i - 1);
    }

    assert_eq!(tree.len(), 0);
    assert!(tree.is_empty());
}

#[test]
fn interleaved_random_operations() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(42);
    let mut keys: Vec<u32> = (0..500).collect();
    keys.shuffle(&mut rng);

    let mut tree = RBTree::new();
    for chunk in keys.chunks(10) {
        for &k in chunk {
            tree.insert(k);
        }
        // drop every other key of the chunk again
        for &k in chunk.iter().step_by(2) {
            assert!(tree.delete(&k));
            assert!(tree.validate());
        }
    }

    assert_eq!(tree.len(), 250);
    let stored: Vec<u32> = tree.iter().copied().collect();
    assert!(stored.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn round_trip_restores_observable_state() {
    init_logging();
    let mut tree: RBTree<u32> = (0..100).map(|k| k * 2).collect();
    let before: Vec<u32> = tree.iter().copied().collect();

    for k in [1, 51, 199, 500] {
        assert!(tree.insert(k));
        assert!(tree.delete(&k));
        assert_eq!(tree.len(), 100);
        assert!(!tree.contains(&k));
        assert!(tree.validate());
    }

    let after: Vec<u32> = tree.iter().copied().collect();
    assert_eq!(before, after);
}
