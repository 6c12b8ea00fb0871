//! Times a persistent workload: fork the tree every `fork_every` deletions and keep going,
//! comparing against never forking at all.

use std::time::Instant;

use clap::Parser;

use jtree::balance::avl::Avl;
use jtree::balance::wb::Wb;
use jtree::Tree;

use jtree_benchmarks::bench_util;
use jtree_benchmarks::bench_util::{BalanceDesc, PrintType};
use jtree_benchmarks::do_for_balance;

struct Run {
	num_keys : usize,
	fork_every : usize,
	print : PrintType
}

macro_rules! run {
	( $run : ident, $balance : ident ) => {
		{
			let deletion_order = jtree::generate::Permutation::Shifted.generate( $run.num_keys );

			let mut t : Tree<i32, $balance> = Tree::new();
			for k in 0..$run.num_keys as i32 {
				t.insert( k );
			}

			let start = Instant::now();
			for ( i, &k ) in deletion_order.iter().enumerate() {
				if i % $run.fork_every == 0 {
					t = t.fork();
				}
				t.delete( &(k as i32) );
			}
			bench_util::report( $run.print, &format!( "{} fork-every-{}", stringify!( $balance ), $run.fork_every ),
				$run.num_keys, $run.num_keys, start.elapsed() );
		}
	}
}

#[derive(Parser)]
#[command(name = "Persistent forking benchmark")]
struct CLI {
	/// Number of keys to insert, then delete one by one
	#[arg(short, long, default_value_t = 100_000)]
	num_keys : usize,

	/// Fork the tree every this many deletions
	#[arg(short, long, default_value_t = 1)]
	fork_every : usize,

	/// Print the results in human-readable form
	#[arg(short, long, default_value_t = false)]
	print : bool,

	/// Output the results as json
	#[arg(short, long, default_value_t = false)]
	json : bool,

	/// Balance disciplines to benchmark. Include both if omitted.
	balances : Vec<BalanceDesc>
}

fn main() {
	let cli = CLI::parse();
	let print = PrintType::from_args( cli.print, cli.json );
	let balances = if !cli.balances.is_empty() { cli.balances.clone() } else { BalanceDesc::all() };

	let run = Run { num_keys : cli.num_keys, fork_every : cli.fork_every.max( 1 ), print };
	for balance in balances {
		do_for_balance!( balance, run, run );
	}
}
