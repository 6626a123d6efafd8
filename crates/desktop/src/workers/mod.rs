pub mod listen_worker;
