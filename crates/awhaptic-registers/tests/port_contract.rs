//! Contract tests shared by every register port implementation.

use std::fs;

use awhaptic_registers::prelude::*;
use proptest::prelude::*;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn sysfs_fixture() -> Result<(tempfile::TempDir, SysfsRegisterPort), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    for node in Node::ALL {
        fs::write(dir.path().join(node.file_name()), "0\n")?;
    }
    let port = SysfsRegisterPort::new(RegisterConfig::new(dir.path()))?;
    Ok((dir, port))
}

fn check_contract(port: &dyn RegisterPort) -> TestResult {
    for node in Node::ALL {
        assert!(port.exists(node), "{node} should exist");
        port.write_int(node, 5)?;
        assert_eq!(port.read_int(node, -1), 5);
    }
    port.write_str(Node::Gain, "128")?;
    assert_eq!(port.read_int(Node::Gain, -1), 128);
    Ok(())
}

#[test]
fn sysfs_port_honours_contract() -> TestResult {
    let (_dir, port) = sysfs_fixture()?;
    check_contract(&port)
}

#[test]
fn memory_port_honours_contract() -> TestResult {
    check_contract(&MemoryRegisterPort::with_all_nodes())
}

#[test]
fn boxed_port_delegates() -> TestResult {
    let memory = MemoryRegisterPort::with_all_nodes();
    let boxed: Box<dyn RegisterPort> = Box::new(memory.clone());
    boxed.write_int(Node::Activate, 1)?;
    assert_eq!(memory.int_writes(), vec![(Node::Activate, 1)]);
    Ok(())
}

#[test]
fn sysfs_port_reports_missing_node_after_removal() -> TestResult {
    let (dir, port) = sysfs_fixture()?;
    fs::remove_file(dir.path().join("activate_mode"))?;
    let err = match port.write_int(Node::ActivateMode, 4) {
        Err(err) => err,
        Ok(()) => return Err("write to a removed node must fail".into()),
    };
    assert_eq!(err.node(), Some(Node::ActivateMode));
    assert!(matches!(err, RegisterError::NotPresent { .. }));
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn sysfs_read_returns_last_written(value in i32::MIN..=i32::MAX) {
        let (_dir, port) = sysfs_fixture().map_err(|e| TestCaseError::fail(e.to_string()))?;
        port.write_int(Node::Duration, value).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(port.read_int(Node::Duration, 0), value);
    }
}
