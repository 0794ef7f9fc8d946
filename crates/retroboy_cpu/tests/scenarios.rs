//! Whole-program runs through the public API, the way a host drives the
//! core.

use anyhow::{ensure, Result};
use retroboy_cpu::disasm;
use retroboy_cpu::{
    BootState, Bus, Cpu, CpuConfig, CpuError, Flag, FlatBus, InterruptSource, IE_ADDR, IF_ADDR,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn boot(program: &[u8]) -> (Cpu, FlatBus) {
    init_logger();
    let mut bus = FlatBus::new();
    bus.load(0x0000, program);
    let mut cpu = Cpu::new();
    cpu.regs_mut().sp = 0xFFFE;
    (cpu, bus)
}

fn run(cpu: &mut Cpu, bus: &mut FlatBus, steps: usize) -> Result<u64> {
    let mut total = 0u64;
    for _ in 0..steps {
        total += u64::from(cpu.step(bus)?);
    }
    Ok(total)
}

#[test]
fn load_and_increment_program() -> Result<()> {
    // LD A,0x42 ; LD B,0x00 ; LD B,A ; INC B
    let (mut cpu, mut bus) = boot(&[0x3E, 0x42, 0x06, 0x00, 0x47, 0x04]);

    let cycles = run(&mut cpu, &mut bus, 4)?;

    assert_eq!(cpu.regs().a, 0x42);
    assert_eq!(cpu.regs().b, 0x43);
    assert!(!cpu.get_flag(Flag::Z));
    assert_eq!(cpu.regs().pc, 0x0006);
    assert_eq!(cycles, 8 + 8 + 4 + 4);
    Ok(())
}

#[test]
fn opcode_0x78_copies_b_into_a() -> Result<()> {
    // LD A,0x42 ; LD B,0x00 ; LD A,B ; INC B
    let (mut cpu, mut bus) = boot(&[0x3E, 0x42, 0x06, 0x00, 0x78, 0x04]);

    run(&mut cpu, &mut bus, 4)?;

    assert_eq!(disasm::mnemonic(0x78), "LD A,B");
    assert_eq!(cpu.regs().a, 0x00);
    assert_eq!(cpu.regs().b, 0x01);
    assert!(!cpu.get_flag(Flag::Z));
    Ok(())
}

#[test]
fn countdown_loop_terminates() -> Result<()> {
    // LD B,5 ; loop: DEC B ; JR NZ,loop ; LD A,0xAA
    let (mut cpu, mut bus) = boot(&[0x06, 0x05, 0x05, 0x20, 0xFD, 0x3E, 0xAA]);

    let mut steps = 0;
    while cpu.regs().pc != 0x0007 {
        cpu.step(&mut bus)?;
        steps += 1;
        ensure!(steps < 100, "loop did not terminate, PC={:04X}", cpu.regs().pc);
    }

    assert_eq!(cpu.regs().b, 0x00);
    assert_eq!(cpu.regs().a, 0xAA);
    // LD + 5 * DEC + 4 taken JR + 1 untaken JR + LD
    assert_eq!(steps, 1 + 5 + 5 + 1);
    assert_eq!(cpu.cycles(), 8 + 5 * 4 + 4 * 12 + 8 + 8);
    Ok(())
}

#[test]
fn subroutine_call_uses_the_stack() -> Result<()> {
    // 0x0000: CALL 0x0010 ; LD B,A
    // 0x0010: LD A,0x99 ; PUSH AF ; POP DE ; RET
    let (mut cpu, mut bus) = boot(&[0xCD, 0x10, 0x00, 0x47]);
    bus.load(0x0010, &[0x3E, 0x99, 0xF5, 0xD1, 0xC9]);

    run(&mut cpu, &mut bus, 6)?;

    assert_eq!(cpu.regs().pc, 0x0004);
    assert_eq!(cpu.regs().sp, 0xFFFE);
    assert_eq!(cpu.regs().b, 0x99);
    assert_eq!(cpu.regs().d, 0x99);
    assert_eq!(bus.read16(0xFFFC), 0x0003);
    Ok(())
}

#[test]
fn vblank_handler_runs_and_returns_with_reti() -> Result<()> {
    // 0x0000: EI ; HALT ; LD B,A
    // 0x0040: LD A,0x01 ; RETI
    let (mut cpu, mut bus) = boot(&[0xFB, 0x76, 0x47]);
    bus.load(0x0040, &[0x3E, 0x01, 0xD9]);
    cpu.enable_interrupts(0x01);

    run(&mut cpu, &mut bus, 2)?;
    assert!(cpu.halted());
    assert!(cpu.ime());

    // Idle while halted.
    assert_eq!(cpu.step(&mut bus)?, 4);

    cpu.request_interrupt(InterruptSource::VBlank);
    // Dispatch and the first handler instruction in one step.
    assert_eq!(cpu.step(&mut bus)?, 20 + 8);
    assert!(!cpu.ime());
    assert_eq!(cpu.interrupts().ifr(), 0x00);

    cpu.step(&mut bus)?;
    assert_eq!(cpu.regs().pc, 0x0002);
    assert!(cpu.ime());

    cpu.step(&mut bus)?;
    assert_eq!(cpu.regs().b, 0x01);
    Ok(())
}

#[test]
fn program_can_request_interrupts_through_if() -> Result<()> {
    // LD A,0x04 ; LDH (0xFF),A ; LDH (0x0F),A ; NOP
    // 0x0050: LD C,0x50
    let (mut cpu, mut bus) = boot(&[0x3E, 0x04, 0xE0, 0xFF, 0xE0, 0x0F, 0x00]);
    bus.load(0x0050, &[0x0E, 0x50]);
    cpu.set_ime(true);

    run(&mut cpu, &mut bus, 3)?;
    assert_eq!(cpu.read_interrupt_register(IE_ADDR), Some(0x04));
    assert_eq!(cpu.read_interrupt_register(IF_ADDR), Some(0xE4));

    assert_eq!(cpu.step(&mut bus)?, 20 + 8);
    assert_eq!(cpu.regs().c, 0x50);
    assert_eq!(bus.read16(0xFFFC), 0x0006);
    Ok(())
}

#[test]
fn illegal_opcode_is_reported_once() -> Result<()> {
    let (mut cpu, mut bus) = boot(&[0x00, 0xDD]);

    cpu.step(&mut bus)?;
    let err = cpu.step(&mut bus).unwrap_err();
    assert_eq!(
        err,
        CpuError::UnimplementedOpcode {
            opcode: 0xDD,
            pc: 0x0001
        }
    );
    assert_eq!(err.to_string(), "unimplemented opcode 0xDD at PC=0x0001");
    assert!(cpu.stopped());
    assert_eq!(cpu.step(&mut bus)?, 0);

    cpu.reset();
    assert!(!cpu.stopped());
    assert_eq!(cpu.regs().pc, 0x0000);
    Ok(())
}

#[test]
fn post_boot_cpu_starts_at_cartridge_entry() -> Result<()> {
    init_logger();
    let config = CpuConfig::builder()
        .boot_state(BootState::DmgPostBoot)
        .build();
    let mut cpu = Cpu::with_config(config);
    let mut bus = FlatBus::new();
    // Cartridge entry: NOP ; JP 0x0150
    bus.load(0x0100, &[0x00, 0xC3, 0x50, 0x01]);

    run(&mut cpu, &mut bus, 2)?;

    assert_eq!(cpu.regs().pc, 0x0150);
    assert_eq!(cpu.regs().af(), 0x01B0);
    assert!(cpu.get_flag(Flag::Z));
    assert!(cpu.get_flag(Flag::C));
    Ok(())
}

#[test]
fn trace_lines_follow_execution() -> Result<()> {
    let (mut cpu, mut bus) = boot(&[0x3E, 0x07, 0x3C]);
    let mut lines = Vec::new();

    for _ in 0..2 {
        cpu.step_with_trace(&mut bus, |entry| lines.push(entry.to_string()))?;
    }

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("A: 00 "));
    assert!(lines[0].ends_with("3E | LD A,d8"));
    assert!(lines[1].starts_with("A: 07 "));
    assert!(lines[1].contains("Cycles: 8"));
    assert!(lines[1].ends_with("3C | INC A"));
    Ok(())
}

#[test]
fn memory_dump_shows_loaded_program() {
    let (_, mut bus) = boot(&[0x3E, 0x42, 0x06, 0x00, 0x47, 0x04]);

    let dump = disasm::dump_memory(&mut bus, 0x0000, 6);

    assert_eq!(dump, "0000: 3E 42 06 00 47 04\n");
}
