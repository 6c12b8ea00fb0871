use clap::Parser;

use jtree::balance::avl::Avl;
use jtree::balance::wb::Wb;

use jtree_benchmarks::bench_util;
use jtree_benchmarks::bench_util::{BalanceDesc, PrintType};
use jtree_benchmarks::do_for_balance;

struct Run {
	num_keys : usize,
	insertion_order : Vec<usize>,
	deletion_order : Vec<usize>,
	print : PrintType
}

macro_rules! run {
	( $run : ident, $balance : ident ) => {
		{
			let (mut tree, build_time) = bench_util::timed_build::<$balance>( &$run.insertion_order );
			bench_util::report( $run.print, &format!( "{} insert", stringify!( $balance ) ),
				$run.num_keys, $run.num_keys, build_time );

			let delete_time = bench_util::timed_delete( &mut tree, &$run.deletion_order );
			bench_util::report( $run.print, &format!( "{} delete", stringify!( $balance ) ),
				$run.num_keys, $run.num_keys, delete_time );
		}
	}
}

#[derive(Parser)]
#[command(name = "Insert/delete benchmark")]
struct CLI {
	/// Number of keys to insert
	#[arg(short, long, default_value_t = 100_000)]
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

	let insertion_order = jtree::generate::Permutation::Random.generate( cli.num_keys );
	let deletion_order = jtree::generate::Permutation::ZigZag.generate( cli.num_keys );

	let run = Run { num_keys : cli.num_keys, insertion_order, deletion_order, print };

	for balance in balances {
		do_for_balance!( balance, run, run );
	}
}
