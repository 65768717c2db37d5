use std::env;
use std::fs;
use std::process;

const USAGE: &str = "\
Usage: chordlibre <song.json> <semitones> [output.json]
       chordlibre --to-key <KEY> <song.json> [output.json]
       chordlibre --chords \"<chord line>\" <semitones> [--flats]";

fn usage() -> ! {
    eprintln!("{}", USAGE);
    process::exit(1);
}

fn parse_semitones(arg: &str) -> i32 {
    match arg.parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("Invalid semitone count '{}'", arg);
            process::exit(1);
        }
    }
}

fn read_song(path: &str) -> String {
    match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", path, e);
            process::exit(1);
        }
    }
}

fn write_output(output_path: Option<&String>, json: &str) {
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, json) {
                eprintln!("Error writing to '{}': {}", path, e);
                process::exit(1);
            }
            eprintln!("Wrote transposed song to {}", path);
        }
        None => {
            println!("{}", json);
        }
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        usage();
    }

    match args[1].as_str() {
        "--chords" => {
            if args.len() < 4 {
                usage();
            }
            let semitones = parse_semitones(&args[3]);
            let prefer_sharps = args.get(4).map(String::as_str) != Some("--flats");
            println!(
                "{}",
                chordlibre::transpose_chord_string(&args[2], semitones, prefer_sharps)
            );
        }
        "--to-key" => {
            if args.len() < 4 {
                usage();
            }
            let source = read_song(&args[3]);
            match chordlibre::transpose_song_json_to_key(&source, &args[2]) {
                Ok(json) => write_output(args.get(4), &json),
                Err(e) => {
                    eprintln!("Transposition error: {}", e);
                    process::exit(1);
                }
            }
        }
        _ => {
            let semitones = parse_semitones(&args[2]);
            let source = read_song(&args[1]);
            match chordlibre::transpose_song_json(&source, semitones) {
                Ok(json) => write_output(args.get(3), &json),
                Err(e) => {
                    eprintln!("Transposition error: {}", e);
                    process::exit(1);
                }
            }
        }
    }
}
