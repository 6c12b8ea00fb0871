//! Times union/intersection/difference on two interleaved key sets of size `num_keys/2` each.

use std::time::Instant;

use clap::Parser;

use jtree::adapters::TreeSet;
use jtree::balance::avl::Avl;
use jtree::balance::wb::Wb;

use jtree_benchmarks::bench_util;
use jtree_benchmarks::bench_util::{BalanceDesc, PrintType};
use jtree_benchmarks::do_for_balance;

struct Run {
	num_keys : usize,
	print : PrintType
}

macro_rules! run {
	( $run : ident, $balance : ident ) => {
		{
			let mut evens : TreeSet<i32, $balance> = TreeSet::new();
			let mut odds : TreeSet<i32, $balance> = TreeSet::new();
			for k in 0..$run.num_keys as i32 {
				if k % 2 == 0 { evens.insert( k ); } else { odds.insert( k ); }
			}

			let start = Instant::now();
			let _union = evens.union( &odds );
			bench_util::report( $run.print, &format!( "{} union", stringify!( $balance ) ),
				$run.num_keys, $run.num_keys, start.elapsed() );

			let start = Instant::now();
			let _inter = evens.intersection( &odds );
			bench_util::report( $run.print, &format!( "{} intersection", stringify!( $balance ) ),
				$run.num_keys, $run.num_keys, start.elapsed() );

			let start = Instant::now();
			let _diff = evens.difference( &odds );
			bench_util::report( $run.print, &format!( "{} difference", stringify!( $balance ) ),
				$run.num_keys, $run.num_keys, start.elapsed() );
		}
	}
}

#[derive(Parser)]
#[command(name = "Set algebra benchmark")]
struct CLI {
	/// Total number of keys, split evenly between the two operand sets
	#[arg(short, long, default_value_t = 200_000)]
	num_keys : usize,

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

	let run = Run { num_keys : cli.num_keys, print };
	for balance in balances {
		do_for_balance!( balance, run, run );
	}
}
