//! Scenario 4: persistent forking. A base tree's keys must remain intact no matter how many
//! descendant generations are forked off it and mutated.

use jtree::balance::avl::Avl;
use jtree::generate::Permutation;
use jtree::Tree;

const N: usize = 200;

#[test]
fn forking_leaves_the_base_untouched() {
    let insertion_order = Permutation::Balanced.generate(N);
    let removal_order = Permutation::ZigZag.generate(N);

    let mut t0: Tree<i32, Avl> = Tree::new();
    for &k in &insertion_order {
        assert!(t0.insert(k as i32));
    }
    assert_eq!(t0.len(), N);

    let mut prev = t0.fork();
    for (i, &k) in removal_order.iter().enumerate() {
        let mut t_i = prev.fork();
        assert!(t_i.delete(&(k as i32)));
        assert_eq!(t_i.len(), N - i - 1);
        t_i.validate_structure().unwrap();
        prev = t_i;
    }

    assert_eq!(t0.len(), N);
    for k in 0..N {
        assert!(t0.contains(&(k as i32)));
    }
    t0.validate_structure().unwrap();
}
