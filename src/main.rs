// SPDX-License-Identifier: MIT
//
// tagtint — derive identity colors for strings from the command line.
//
// One line per input: hex color, preferred text color, achieved WCAG
// contrast ratio, and the input itself. Handy for eyeballing what a tag
// or username will look like before wiring the library into a UI.

use std::env;
use std::process;

use tagtint_core::derive_color_for;

fn main() {
    let mut dark_mode = false;
    let mut inputs = Vec::new();

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--dark" => dark_mode = true,
            "--light" => dark_mode = false,
            "-h" | "--help" => {
                print_usage();
                return;
            }
            _ => inputs.push(arg),
        }
    }

    if inputs.is_empty() {
        eprintln!("error: no input strings");
        print_usage();
        process::exit(2);
    }

    for input in &inputs {
        let derived = derive_color_for(input, dark_mode);
        let text = if derived.prefer_white_text { "white" } else { "black" };
        println!("{}  {text}  {:.2}:1  {input}", derived.color, derived.contrast);
    }
}

fn print_usage() {
    eprintln!("usage: tagtint [--dark|--light] STRING...");
    eprintln!();
    eprintln!("Derives a deterministic, contrast-checked identity color for");
    eprintln!("each string and prints `#hex  text-color  contrast  input`.");
    eprintln!("--dark selects the dark-interface lightness band.");
}
