//! Scenario 6: vector fork independence across a whole chain of generations.

use jtree::Vector;

const M: usize = 40;

#[test]
fn fork_chain_stays_independent() {
    // states[i] holds i elements: 0, 1, ..., i-1.
    let mut states: Vec<Vector<i32>> = Vec::with_capacity(M + 1);
    states.push(Vector::new());
    for i in 1..=M {
        let v_i = {
            let prev = &mut states[i - 1];
            let mut forked = prev.fork();
            forked.push((i - 1) as i32);
            forked
        };
        states.push(v_i);
    }

    for (i, v) in states.iter().enumerate() {
        assert_eq!(v.len(), i);
        for j in 0..i {
            assert_eq!(*v.get(j).unwrap(), j as i32);
        }
    }

    // Fork every state again and triple its elements in place.
    let mut tripled: Vec<Vector<i32>> = Vec::with_capacity(M + 1);
    for v in &mut states {
        let mut forked = v.fork();
        for j in 0..forked.len() {
            let value = *forked.get(j).unwrap();
            forked.set(j, value * 3).unwrap();
        }
        tripled.push(forked);
    }

    for (i, v) in tripled.iter().enumerate() {
        assert_eq!(v.len(), i);
        for j in 0..i {
            assert_eq!(*v.get(j).unwrap(), 3 * j as i32);
        }
    }

    // the un-tripled states must be untouched by the tripling forks.
    for (i, v) in states.iter().enumerate() {
        assert_eq!(v.len(), i);
        for j in 0..i {
            assert_eq!(*v.get(j).unwrap(), j as i32);
        }
    }
}
