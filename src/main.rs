use clap::{Parser, Subcommand};
use indicatif::ProgressBar;
use std::path::PathBuf;

/// Command-line interface for chunkdir
#[derive(Parser, Debug)]
#[command(name = "chunkdir", version, about = "File chunking and content hashing utilities")]
struct Cli {
    /// Disables the progress spinner (global)
    #[arg(long, global = true)]
    no_progress: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Split a file into fixed-size chunk files
    Split {
        /// File to split
        file: PathBuf,
        /// Directory to store the chunk files
        out_dir: PathBuf,
        /// Chunk size in bytes
        #[arg(short, long, value_name = "BYTES", default_value_t = chunkdir::DEFAULT_CHUNK_SIZE)]
        chunk_size: usize,
        /// Print the digest of every chunk
        #[arg(long)]
        hashes: bool,
    },
    /// Reassemble chunk files into a single file
    Join {
        /// Directory containing the chunk files
        chunk_dir: PathBuf,
        /// Path of the file to recreate
        out_file: PathBuf,
    },
    /// Hash every file under a directory, recursively
    HashTree {
        /// Directory to hash
        dir: PathBuf,
    },
    /// Delete the chunk files in a directory
    Clean {
        /// Directory to clean
        dir: PathBuf,
    },
}

fn spinner(no_progress: bool, message: &'static str) -> Option<ProgressBar> {
    if no_progress {
        None
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_message(message);
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        Some(pb)
    }
}

fn main() {
    // Initialize logging using env_logger and CHUNKDIR_LOG
    env_logger::Builder::from_env(env_logger::Env::new().filter("CHUNKDIR_LOG")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Split {
            file,
            out_dir,
            chunk_size,
            hashes,
        } => {
            let pb = spinner(cli.no_progress, "Splitting...");
            if hashes {
                match chunkdir::split_file_with_hashes(&file, &out_dir, chunk_size) {
                    Ok(chunk_hashes) => {
                        if let Some(pb) = pb {
                            pb.finish_and_clear();
                        }
                        for (path, hash) in &chunk_hashes {
                            println!("{}  {}", path.display(), hash);
                        }
                        println!("Split into {} chunks.", chunk_hashes.len());
                    }
                    Err(e) => {
                        eprintln!("Split failed: {}", e);
                        std::process::exit(1);
                    }
                }
            } else {
                match chunkdir::split_file(&file, &out_dir, chunk_size) {
                    Ok(count) => {
                        if let Some(pb) = pb {
                            pb.finish_and_clear();
                        }
                        println!("Split into {} chunks.", count);
                    }
                    Err(e) => {
                        eprintln!("Split failed: {}", e);
                        std::process::exit(1);
                    }
                }
            }
        }
        Commands::Join {
            chunk_dir,
            out_file,
        } => {
            let pb = spinner(cli.no_progress, "Joining...");
            match chunkdir::join_chunks(&chunk_dir, &out_file) {
                Ok(bytes) => {
                    if let Some(pb) = pb {
                        pb.finish_and_clear();
                    }
                    println!("Wrote {} bytes to {}.", bytes, out_file.display());
                }
                Err(e) => {
                    eprintln!("Join failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::HashTree { dir } => {
            let pb = spinner(cli.no_progress, "Hashing...");
            match chunkdir::hash_tree(&dir) {
                Ok(hashes) => {
                    if let Some(pb) = pb {
                        pb.finish_and_clear();
                    }
                    for hash in &hashes {
                        println!("{}", hash);
                    }
                }
                Err(e) => {
                    eprintln!("Hashing failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Clean { dir } => {
            if let Err(e) = chunkdir::delete_chunk_files(&dir) {
                eprintln!("Clean failed: {}", e);
                std::process::exit(1);
            }
            println!("Removed chunk files from {}.", dir.display());
        }
    }
}
