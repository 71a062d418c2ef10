use std::io;
use std::io::BufRead;
use std::io::Write;
use std::process;

use itertools::Itertools;
use log::debug;

use codebook::CodeBook;
use codebook::FrequencyTable;
use codebook::Node;

fn main() {
    env_logger::init();

    print!("Type your text: ");
    io::stdout().flush().unwrap();

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).unwrap();
    let text = line.trim_end_matches(|c| c == '\r' || c == '\n');

    let frequencies = FrequencyTable::from_symbols(text.chars());
    let root = match Node::build(&frequencies) {
        Ok(root) => root,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };
    let book = CodeBook::from_tree(&root);
    debug!(
        "{} distinct symbols, {} bits encoded",
        book.len(),
        book.weighted_len(&frequencies),
    );

    println!(" Char | Huffman code ");
    println!("----------------------");
    for (symbol, code) in book.iter().sorted_by(|a, b| a.0.cmp(b.0)) {
        println!(" {:<4} |{:>13}", symbol, code.to_string());
    }
}
