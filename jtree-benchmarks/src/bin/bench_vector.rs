//! Times push/pop/get/set on the persistent vector across a few internal/external node widths.

use std::time::Instant;

use clap::Parser;

use jtree::Vector;

use jtree_benchmarks::bench_util;
use jtree_benchmarks::bench_util::PrintType;

fn run_widths( print : PrintType, num_elems : usize, internal_shift : u32, external_shift : u32 ) {
	let label = format!( "IS={internal_shift} ES={external_shift}" );

	let mut v : Vector<i32> = Vector::with_widths( internal_shift, external_shift )
		.expect( "benchmark widths must be valid" );

	let start = Instant::now();
	for i in 0..num_elems {
		v.push( i as i32 );
	}
	bench_util::report( print, &format!( "{label} push" ), num_elems, num_elems, start.elapsed() );

	let start = Instant::now();
	for i in 0..num_elems {
		v.set( i, i as i32 * 2 ).unwrap();
	}
	bench_util::report( print, &format!( "{label} set" ), num_elems, num_elems, start.elapsed() );

	let start = Instant::now();
	for i in 0..num_elems {
		let _ = v.get( i ).unwrap();
	}
	bench_util::report( print, &format!( "{label} get" ), num_elems, num_elems, start.elapsed() );

	let start = Instant::now();
	while !v.is_empty() {
		v.pop().unwrap();
	}
	bench_util::report( print, &format!( "{label} pop" ), num_elems, num_elems, start.elapsed() );
}

#[derive(Parser)]
#[command(name = "Vector benchmark")]
struct CLI {
	/// Number of elements to push/get/set/pop
	#[arg(short, long, default_value_t = 500_000)]
	num_elems : usize,

	/// Print the results in human-readable form
	#[arg(short, long, default_value_t = false)]
	print : bool,

	/// Output the results as json
	#[arg(short, long, default_value_t = false)]
	json : bool
}

fn main() {
	let cli = CLI::parse();
	let print = PrintType::from_args( cli.print, cli.json );

	for &( is, es ) in &[ ( 5u32, 5u32 ), ( 3, 2 ), ( 7, 4 ) ] {
		run_widths( print, cli.num_elems, is, es );
	}
}
