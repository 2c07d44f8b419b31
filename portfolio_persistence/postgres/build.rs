use std::{
    collections::BTreeMap,
    fmt::Write,
    path::{Path, PathBuf},
};

fn main() {
    println!("cargo::rerun-if-changed=migrations");

    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("migrations");
    let out = PathBuf::from(std::env::var("OUT_DIR").unwrap()).join("migrations.rs");

    let mut code = String::from("&[");
    for (name, Sql { up, down }) in collect_migrations(&dir) {
        write!(code, "Migration{{name:{name:?},up:{up:?},down:{down:?}}},").unwrap();
    }
    code.push(']');
    std::fs::write(&out, code).unwrap();

    println!("cargo::rustc-env=MIGRATIONS={}", out.display());
}

#[derive(Default)]
struct Sql {
    up: String,
    down: String,
}

/// Pairs `<name>.up.sql` and `<name>.down.sql`, ordered by name.
fn collect_migrations(dir: &Path) -> BTreeMap<String, Sql> {
    let mut out = BTreeMap::<String, Sql>::new();
    for entry in dir.read_dir().unwrap() {
        let entry = entry.unwrap();
        let file_name = entry.file_name().into_string().unwrap();
        let (name, up) = if let Some(name) = file_name.strip_suffix(".up.sql") {
            (name, true)
        } else if let Some(name) = file_name.strip_suffix(".down.sql") {
            (name, false)
        } else {
            continue;
        };

        let content = std::fs::read_to_string(entry.path()).unwrap();
        let sql = out.entry(name.to_owned()).or_default();
        if up {
            sql.up = content;
        } else {
            sql.down = content;
        }
    }
    out
}
