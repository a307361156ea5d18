// third-party imports
use criterion::criterion_main;

const ND: &str = ":"; // name delimiter

mod samples;
mod ws;

criterion_main!(ws::lex::benches, ws::parse::benches);
