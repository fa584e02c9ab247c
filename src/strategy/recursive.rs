//! Recursive descent disassembly strategy

use std::collections::{HashSet, VecDeque};

use crate::{Address, BasicBlock, Decoder, Disassembly, DisassemblyError, Instruction};

/// Recursive-descent disassembly into a Control Flow Graph (CFG), starting
/// at the first byte of the image.
pub fn run(image: &[u8], base: Address, decoder: &dyn Decoder) -> Result<Disassembly, DisassemblyError> {
    run_from(image, base, base, decoder)
}

/// Run recursive disassembly from a specific entry point.
///
/// Follows recorded jump and call edges plus fall-through. Indirect
/// branches (`BR`, `EBR`, `TIJMP`) end their block without successors
/// since the target is only known at run time.
pub fn run_from(
    image: &[u8],
    base: Address,
    entry_point: Address,
    decoder: &dyn Decoder,
) -> Result<Disassembly, DisassemblyError> {
    log::debug!("Starting recursive descent disassembly from 0x{:X}", entry_point);

    let mut blocks = recursive_disassemble(image, base, entry_point, decoder);
    blocks.sort_by_key(|block| block.start);

    log::debug!(
        "Recursive descent complete: {} basic blocks, {} instructions",
        blocks.len(),
        blocks.iter().map(|b| b.insns.len()).sum::<usize>()
    );

    Ok(Disassembly::Cfg(blocks))
}

/// Offset of `address` within the image, if it lies inside it.
fn offset_of(image: &[u8], base: Address, address: Address) -> Option<usize> {
    let offset = address.checked_sub(base)? as usize;
    (offset < image.len()).then_some(offset)
}

/// Core recursive disassembly algorithm
fn recursive_disassemble(
    image: &[u8],
    base: Address,
    entry_point: Address,
    decoder: &dyn Decoder,
) -> Vec<BasicBlock> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    // Mirrors the contents of `queue` for constant time lookups
    let mut queued = HashSet::new();
    let mut blocks = Vec::new();

    queue.push_back(entry_point);
    queued.insert(entry_point);

    while let Some(addr) = queue.pop_front() {
        queued.remove(&addr);
        if !seen.insert(addr) {
            continue;
        }
        if offset_of(image, base, addr).is_none() {
            log::warn!("Branch target 0x{:X} lies outside the image", addr);
            continue;
        }

        let mut block = BasicBlock::new(addr);
        let mut at = addr;
        let mut ended = false;

        while let Some(offset) = offset_of(image, base, at) {
            // A block runs into the start of another one
            if at != addr && (seen.contains(&at) || queued.contains(&at)) {
                break;
            }
            let insn = match decoder.decode(&image[offset..], at) {
                Ok(insn) => insn,
                Err(err) => {
                    log::trace!("0x{:X}: {}", at, err);
                    break;
                }
            };
            at = insn.next_address();
            let last = is_block_end(&insn);
            block.insns.push(insn);
            if last {
                ended = true;
                break;
            }
        }

        if block.insns.is_empty() {
            continue;
        }

        block.succs = if ended {
            block.last_instruction().map(successors).unwrap_or_default()
        } else if offset_of(image, base, at).is_some() {
            vec![at]
        } else {
            Vec::new()
        };

        for &target in &block.succs {
            if !seen.contains(&target) && queued.insert(target) {
                queue.push_back(target);
            }
        }
        blocks.push(block);
    }

    split_overlaps(&mut blocks);
    blocks
}

/// Cuts every block short where another block starts, so no instruction is
/// listed twice. Happens when a branch lands inside an already decoded run.
fn split_overlaps(blocks: &mut [BasicBlock]) {
    let starts: HashSet<Address> = blocks.iter().map(|b| b.start).collect();
    for block in blocks.iter_mut() {
        let cut = block
            .insns
            .iter()
            .skip(1)
            .position(|insn| starts.contains(&insn.address));
        if let Some(index) = cut {
            let next = block.insns[index + 1].address;
            block.insns.truncate(index + 1);
            block.succs = vec![next];
        }
    }
}

/// Whether the block must end after `insn`.
fn is_block_end(insn: &Instruction) -> bool {
    insn.mnemonic.ends_block() || !insn.flow.jumps.is_empty() || !insn.flow.calls.is_empty()
}

/// Successor addresses of a block-ending instruction.
fn successors(insn: &Instruction) -> Vec<Address> {
    let mnemonic = insn.mnemonic;
    let mut succs = Vec::new();

    if !mnemonic.is_indirect_branch() {
        succs.extend(insn.flow.branch_targets());
    }

    let falls_through = mnemonic.is_conditional_jump() || mnemonic.is_call();
    if falls_through {
        let next = insn.next_address();
        if !succs.contains(&next) {
            succs.push(next);
        }
    }
    succs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mcs96Decoder;

    fn blocks(image: &[u8], base: Address, entry: Address) -> Vec<BasicBlock> {
        match run_from(image, base, entry, &Mcs96Decoder::new()).unwrap() {
            Disassembly::Cfg(blocks) => blocks,
            Disassembly::Stream(_) => panic!("Expected CFG disassembly"),
        }
    }

    #[test]
    fn test_recursive_disassembly_simple() {
        // CLR R_30; RET
        let result = blocks(&[0x01, 0x30, 0xF0], 0x2000, 0x2000);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].insns.len(), 2);
        assert_eq!(result[0].insns[1].mnemonic.to_string(), "RET");
        assert!(result[0].succs.is_empty());
    }

    #[test]
    fn test_conditional_branch_splits_blocks() {
        // 0x2000: JE +2
        // 0x2002: CLR R_30
        // 0x2004: RET
        let image = [0xDF, 0x02, 0x01, 0x30, 0xF0];
        let result = blocks(&image, 0x2000, 0x2000);

        let starts: Vec<Address> = result.iter().map(|b| b.start).collect();
        assert_eq!(starts, vec![0x2000, 0x2002, 0x2004]);
        assert_eq!(result[0].succs, vec![0x2004, 0x2002]);
        // The fall-through block stops where the jump target begins
        assert_eq!(result[1].insns.len(), 1);
        assert_eq!(result[1].succs, vec![0x2004]);
        assert!(result[2].succs.is_empty());
    }

    #[test]
    fn test_call_falls_through() {
        // 0x00: SCALL +1
        // 0x02: RET
        // 0x03: NOP
        // 0x04: RET
        let image = [0x28, 0x01, 0xF0, 0xFD, 0xF0];
        let result = blocks(&image, 0, 0);

        assert_eq!(result[0].succs, vec![0x03, 0x02]);
        assert_eq!(result.len(), 3);
        assert_eq!(result.iter().map(|b| b.insns.len()).sum::<usize>(), 4);
    }

    #[test]
    fn test_unconditional_jump_skips_data() {
        // SJMP over two bytes that would decode as a reserved opcode
        let image = [0x20, 0x02, 0x10, 0x10, 0xF0];
        let result = blocks(&image, 0, 0);

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].succs, vec![0x04]);
        assert!(result.iter().all(|b| b.insns.iter().all(|i| !i.reserved)));
    }

    #[test]
    fn test_backward_branch_splits_block() {
        // 0x00: CLR R_30
        // 0x02: INC R_30
        // 0x04: JNE 0x02
        // 0x06: RET
        let image = [0x01, 0x30, 0x07, 0x30, 0xD7, 0xFC, 0xF0];
        let result = blocks(&image, 0, 0);

        let starts: Vec<Address> = result.iter().map(|b| b.start).collect();
        assert_eq!(starts, vec![0x00, 0x02, 0x06]);
        assert_eq!(result[0].insns.len(), 1);
        assert_eq!(result[0].succs, vec![0x02]);
        assert_eq!(result[1].succs, vec![0x02, 0x06]);
        assert_eq!(result.iter().map(|b| b.insns.len()).sum::<usize>(), 4);
    }

    #[test]
    fn test_shared_target_decoded_once() {
        // 0x00: JE 0x04
        // 0x02: JE 0x08
        // 0x04: JE 0x08
        // 0x06: RET
        // 0x08: RET
        let image = [0xDF, 0x02, 0xDF, 0x04, 0xDF, 0x02, 0xF0, 0xFF, 0xF0];
        let result = blocks(&image, 0, 0);

        let starts: Vec<Address> = result.iter().map(|b| b.start).collect();
        assert_eq!(starts, vec![0x00, 0x02, 0x04, 0x06, 0x08]);
        assert!(result.iter().all(|b| b.insns.len() == 1));
        assert_eq!(result[1].succs, vec![0x08, 0x04]);
        assert_eq!(result[2].succs, vec![0x08, 0x06]);
    }

    #[test]
    fn test_indirect_branch_has_no_successors() {
        // BR [R_30]
        let result = blocks(&[0xE3, 0x30, 0xF0], 0, 0);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].insns.len(), 1);
        assert!(result[0].succs.is_empty());
    }

    #[test]
    fn test_target_outside_image() {
        // LJMP 0x1000
        let result = blocks(&[0xE7, 0xFD, 0x0F], 0, 0);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].succs, vec![0x1000]);
    }

    #[test]
    fn test_entry_outside_image() {
        assert!(blocks(&[0xF0], 0x2000, 0x1000).is_empty());
    }

    #[test]
    fn test_loop_terminates() {
        // SJMP -2
        let result = blocks(&[0x27, 0xFE], 0, 0);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].succs, vec![0]);
    }
}
