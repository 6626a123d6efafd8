pub mod listen_once_use_case;
