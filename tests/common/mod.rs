use assert_cmd::Command;

pub fn remark_cmd() -> Command {
    let mut cmd = Command::cargo_bin("coderemark").unwrap();
    cmd.env_remove("CODE_REMARK_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}
