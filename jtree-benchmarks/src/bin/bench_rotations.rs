//! Times insertion under every permutation family, for both balance disciplines, to compare
//! how much rebalancing work each insertion order actually triggers.

use clap::Parser;

use jtree::balance::avl::Avl;
use jtree::balance::wb::Wb;

use jtree_benchmarks::bench_util;
use jtree_benchmarks::bench_util::{BalanceDesc, PrintType};
use jtree_benchmarks::do_for_balance;

struct Run<'a> {
	keys : &'a [usize],
	label : &'a str,
	num_keys : usize,
	print : PrintType
}

macro_rules! run {
	( $run : ident, $balance : ident ) => {
		{
			let (_tree, build_time) = bench_util::timed_build::<$balance>( $run.keys );
			bench_util::report( $run.print,
				&format!( "{} {}", stringify!( $balance ), $run.label ), $run.num_keys, $run.num_keys, build_time );
		}
	}
}

#[derive(Parser)]
#[command(name = "Rebalance cost benchmark")]
struct CLI {
	/// Number of keys to insert, per permutation
	#[arg(short, long, default_value_t = 50_000)]
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

	for ( label, keys ) in bench_util::all_permutations( cli.num_keys ) {
		let run = Run { keys : &keys, label, num_keys : cli.num_keys, print };
		for balance in &balances {
			let balance = *balance;
			do_for_balance!( balance, run, run );
		}
	}
}
