use std::{env, fs::read_to_string, path::PathBuf, process::exit, rc::Rc};

use calculadin::{
    display_error, lexer::lexer::tokenize, parser::parser::parse, printer::printer::print_ast,
    semantic::analyze,
};

fn print_usage() {
    eprintln!("Usage: calculadin <flag> <file>");
    eprintln!("Flags:");
    eprintln!("  -l  : run lexical analysis and print the token stream");
    eprintln!("  -p  : run lexical and syntactic analysis");
    eprintln!("  -pp : run lexical and syntactic analysis and print the AST");
    eprintln!("  -s  : run lexical, syntactic and semantic analysis");
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 3 {
        print_usage();
        exit(1);
    }

    let flag: &str = &args[1];
    let file_path = PathBuf::from(&args[2]);
    let file_name = file_path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| args[2].clone());

    if !matches!(flag, "-l" | "-p" | "-pp" | "-s") {
        eprintln!("Unknown flag `{}`.", flag);
        print_usage();
        exit(1);
    }

    let source = match read_to_string(&file_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path.display(), error);
            exit(1);
        }
    };

    // Lexical analysis
    let tokens = match tokenize(source, Some(file_name.clone())) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, file_path);
            exit(1);
        }
    };

    if flag == "-l" {
        for token in &tokens {
            token.debug();
        }
        println!("Lexical analysis completed successfully.");
        return;
    }

    // Syntactic analysis
    let program = match parse(tokens, Rc::new(file_name)) {
        Ok(program) => program,
        Err(error) => {
            display_error(&error, file_path);
            exit(1);
        }
    };

    if flag == "-p" {
        println!("Lexical and syntactic analysis completed successfully.");
        return;
    }

    if flag == "-pp" {
        println!("Lexical and syntactic analysis completed successfully.");
        println!("\n--- AST ---");
        println!("{}", print_ast(&program));
        return;
    }

    // Semantic analysis; diagnostics are accumulated, so render all of them
    let analysis = analyze(&program);

    if !analysis.passed() {
        eprintln!("Semantic errors found:");
        for error in &analysis.errors {
            display_error(error, file_path.clone());
        }
        exit(1);
    }

    println!("Lexical, syntactic and semantic analysis completed successfully.");
    println!("Variables allocated: {}", analysis.total_allocated());
}
