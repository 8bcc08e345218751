#![allow(clippy::many_single_char_names)]
use crate::consts::{INDEX, RC, SHIFTS};

#[inline(always)]
fn f(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

#[inline(always)]
fn g(x: u32, y: u32, z: u32) -> u32 {
    (x & z) | (y & !z)
}

#[inline(always)]
fn h(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

#[inline(always)]
fn i(x: u32, y: u32, z: u32) -> u32 {
    y ^ (x | !z)
}

/// One step: `b + rotl(a + mix + word + constant, shift)`.
#[inline(always)]
fn step(a: u32, b: u32, mix: u32, word: u32, constant: u32, shift: u32) -> u32 {
    a.wrapping_add(mix)
        .wrapping_add(word)
        .wrapping_add(constant)
        .rotate_left(shift)
        .wrapping_add(b)
}

#[inline]
fn read_words(block: &[u8; 64]) -> [u32; 16] {
    let mut x = [0u32; 16];
    for (o, c) in x.iter_mut().zip(block.chunks_exact(4)) {
        *o = u32::from_le_bytes([c[0], c[1], c[2], c[3]]);
    }
    x
}

#[inline]
fn compress_block(state: &mut [u32; 4], input: &[u8; 64]) {
    let x = read_words(input);
    let [mut a, mut b, mut c, mut d] = *state;

    for n in 0..64 {
        let round = n / 16;
        let mix = match round {
            0 => f(b, c, d),
            1 => g(b, c, d),
            2 => h(b, c, d),
            _ => i(b, c, d),
        };
        let t = step(a, b, mix, x[INDEX[n]], RC[n], SHIFTS[round][n % 4]);
        a = d;
        d = c;
        c = b;
        b = t;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
}

/// MD5 compression function.
///
/// Runs the four-round schedule over every block in order, adding each
/// block's result onto `state`.
#[inline]
pub fn compress(state: &mut [u32; 4], blocks: &[[u8; 64]]) {
    for block in blocks {
        compress_block(state, block)
    }
}
