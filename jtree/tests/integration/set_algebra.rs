//! Scenario 3: set algebra on N=230, plus the persistent-mode operand-unchanged check.

use jtree::adapters::TreeSet;
use jtree::balance::avl::Avl;

const N: i32 = 230;

fn build(keys: impl Iterator<Item = i32>) -> TreeSet<i32, Avl> {
    let mut s = TreeSet::new();
    for k in keys {
        s.insert(k);
    }
    s
}

fn collected(s: &TreeSet<i32, Avl>) -> Vec<i32> {
    s.iter().copied().collect()
}

#[test]
fn set_algebra_on_230() {
    let evens: Vec<i32> = (0..N).step_by(2).collect();
    let odds: Vec<i32> = (1..N).step_by(2).collect();
    let all: Vec<i32> = (0..N).collect();

    let mut e = build(evens.iter().copied());
    let mut o = build(odds.iter().copied());
    let mut u = build(all.iter().copied());

    let e_before = collected(&e);
    let o_before = collected(&o);
    let u_before = collected(&u);

    let union_eo = e.union(&o);
    assert!(union_eo.set_equals(&u));

    let inter_eo = e.intersection(&o);
    assert!(inter_eo.is_empty());

    let inter_eu = e.intersection(&u);
    assert!(inter_eu.set_equals(&e));

    let diff_uo = u.difference(&o);
    assert!(diff_uo.set_equals(&e));

    let diff_uu = u.difference(&u);
    assert!(diff_uu.is_empty());

    // every operand above was read through `&mut self`/`&Self` but never destructively updated
    assert_eq!(collected(&e), e_before);
    assert_eq!(collected(&o), o_before);
    assert_eq!(collected(&u), u_before);
}
