//! Mint an Argon2 hash for the `directory.admins` config section.
//!
//! Usage: `mkpasswd <password>`

use std::env;
use std::process::exit;

use fluentgate::auth::password::hash_password;

fn main() {
    let Some(password) = env::args().nth(1) else {
        eprintln!("usage: mkpasswd <password>");
        exit(2);
    };

    match hash_password(&password) {
        Ok(hash) => println!("{hash}"),
        Err(e) => {
            eprintln!("failed to hash password: {e}");
            exit(1);
        }
    }
}
