//! Scenario 1 & 2: the 7x7 insertion/deletion permutation matrix, N=518, for both balance
//! disciplines.

use jtree::balance::avl::Avl;
use jtree::balance::wb::Wb;
use jtree::generate::Permutation;

use crate::util::check_permutation_matrix;

const N: usize = 518;

#[test]
fn avl_matrix() {
    for ins in Permutation::ALL {
        let perm_ins = ins.generate(N);
        for del in Permutation::ALL {
            let perm_del = del.generate(N);
            check_permutation_matrix::<Avl>(N, &perm_ins, &perm_del);
        }
    }
}

#[test]
fn wb_matrix() {
    for ins in Permutation::ALL {
        let perm_ins = ins.generate(N);
        for del in Permutation::ALL {
            let perm_del = del.generate(N);
            check_permutation_matrix::<Wb>(N, &perm_ins, &perm_del);
        }
    }
}
