// Mirrors `CREATE_FILE_TABLE` in `connection.rs`.

diesel::table! {
    filetable (hash) {
        hash -> Text,
        filename -> Text,
        entropy -> Double,
        flags -> BigInt,
    }
}
