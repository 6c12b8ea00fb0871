///! Utilities for benchmarking jtree.

use std::time::{Duration, Instant};

use clap::clap_derive::ValueEnum;
use jtree::generate::Permutation;
use jtree::Tree;

/// How to print benchmark results.
#[derive(Clone, Copy, Eq, PartialEq)]
pub enum PrintType {
	Silent,
	Print,
	Json
}

impl PrintType {
	pub fn from_args( print : bool, json : bool ) -> Self {
		if print {
			if json {
				eprintln!( "Cannot both print and print json" )
			}
			Self::Print
		}
		else if json {
			Self::Json
		}
		else {
			Self::Silent
		}
	}
}

/// Which balance discipline to exercise, usable by CLAP.
#[derive( Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum )]
pub enum BalanceDesc {
	Avl,
	Wb
}

impl BalanceDesc {
	pub fn all() -> Vec<BalanceDesc> {
		vec![BalanceDesc::Avl, BalanceDesc::Wb]
	}

	pub fn name( self ) -> &'static str {
		match self {
			BalanceDesc::Avl => "AVL",
			BalanceDesc::Wb => "WB"
		}
	}
}

/// Call `$do_mac!( $obj, <balance-type> )`, where `<balance-type>` is the `jtree::balance`
/// strategy associated to `$desc_enum`.
#[macro_export]
macro_rules! do_for_balance {
	( $desc_enum : ident, $do_mac : ident, $obj : ident ) => {
		{
			match $desc_enum {
				jtree_benchmarks::bench_util::BalanceDesc::Avl => $do_mac!( $obj, Avl ),
				jtree_benchmarks::bench_util::BalanceDesc::Wb => $do_mac!( $obj, Wb )
			}
		}
	}
}

/// Times `f` once, returning the elapsed duration.
pub fn time<R>( f : impl FnOnce() -> R ) -> ( R, Duration ) {
	let start = Instant::now();
	let r = f();
	( r, start.elapsed() )
}

/// Builds a tree by inserting `keys` in order, timing only the insertions.
pub fn timed_build<B>( keys : &[usize] ) -> ( Tree<i32, B>, Duration )
	where B : jtree::balance::BalanceStrategy<i32>
{
	let mut t : Tree<i32, B> = Tree::new();
	let start = Instant::now();
	for &k in keys {
		t.insert( k as i32 );
	}
	( t, start.elapsed() )
}

/// Deletes `keys` from `t` in order, timing only the deletions.
pub fn timed_delete<B>( t : &mut Tree<i32, B>, keys : &[usize] ) -> Duration
	where B : jtree::balance::BalanceStrategy<i32>
{
	let start = Instant::now();
	for &k in keys {
		t.delete( &(k as i32) );
	}
	start.elapsed()
}

/// Generates every permutation family of `0..n`, in [`Permutation::ALL`] order.
pub fn all_permutations( n : usize ) -> Vec<( &'static str, Vec<usize> )> {
	Permutation::ALL.iter().map( |p| ( perm_name( *p ), p.generate( n ) ) ).collect()
}

pub fn perm_name( p : Permutation ) -> &'static str {
	match p {
		Permutation::Ascending => "ascending",
		Permutation::Descending => "descending",
		Permutation::Balanced => "balanced",
		Permutation::ZigZag => "zig_zag",
		Permutation::Shifted => "shifted",
		Permutation::Bitonic => "bitonic",
		Permutation::Random => "random"
	}
}

/// Prints (or json-reports) one timing row.
pub fn report( print : PrintType, label : &str, num_vertices : usize, num_ops : usize, duration : Duration ) {
	match print {
		PrintType::Print => {
			let per_op = duration.as_micros() as f64 / ( num_ops as f64 );
			println!( "{label:<28} {:8.3}ms ({per_op:.3}µs/op)", duration.as_micros() as f64 / 1000. );
		}
		PrintType::Json => {
			println!( "{}", json::stringify( json::object!{
				name : label,
				num_vertices : num_vertices,
				num_ops : num_ops,
				time_ns : usize::try_from( duration.as_nanos() )
					.unwrap_or( usize::MAX )
			} ) )
		}
		PrintType::Silent => {}
	}
}
