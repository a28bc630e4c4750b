use std::io;

error_chain! {
    foreign_links {
        Io(io::Error);
    }

    errors {
        KeyFile(path: String) {
            description("could not read keys file")
            display("could not read keys from '{}'", path)
        }
    }
}
