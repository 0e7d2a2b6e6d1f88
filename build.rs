fn main() {
    // Compile lalrpop grammar files (src/expression/sop.lalrpop)
    lalrpop::process_root().unwrap();

    println!("cargo:rerun-if-changed=src/expression/sop.lalrpop");
}
