#![cfg(feature = "test-vectors")]

// 32-round known-answer vectors. Keys and blocks are big-endian byte strings.

use hex_literal::hex;
use tinytea::{Cipher, Key};

struct TestVector {
    key: [u8; 16],
    plaintext: [u8; 8],
    ciphertext: [u8; 8],
}

const VECTORS: &[TestVector] = &[
    TestVector {
        key: hex!("000102030405060708090a0b0c0d0e0f"),
        plaintext: hex!("4142434445464748"),
        ciphertext: hex!("497df3d072612cb5"),
    },
    TestVector {
        key: hex!("000102030405060708090a0b0c0d0e0f"),
        plaintext: hex!("4141414141414141"),
        ciphertext: hex!("e78f2d13744341d8"),
    },
    TestVector {
        key: hex!("000102030405060708090a0b0c0d0e0f"),
        plaintext: hex!("5a5b6e278948d77f"),
        ciphertext: hex!("4141414141414141"),
    },
    TestVector {
        key: hex!("00000000000000000000000000000000"),
        plaintext: hex!("4142434445464748"),
        ciphertext: hex!("a0390589f8b8efa5"),
    },
    TestVector {
        key: hex!("00000000000000000000000000000000"),
        plaintext: hex!("4141414141414141"),
        ciphertext: hex!("ed23375a821a8c2d"),
    },
    TestVector {
        key: hex!("00000000000000000000000000000000"),
        plaintext: hex!("70e1225d6e4e7655"),
        ciphertext: hex!("4141414141414141"),
    },
];

#[test]
fn kat_encode() {
    for vector in VECTORS {
        let cipher = Cipher::new(&Key::from_bytes(&vector.key));
        // 8-byte plaintexts encode to exactly one block, no padding
        assert_eq!(cipher.encode(&vector.plaintext), vector.ciphertext);
    }
}

#[test]
fn kat_decode() -> tinytea::Result<()> {
    for vector in VECTORS {
        let cipher = Cipher::new(&Key::from_bytes(&vector.key));
        assert_eq!(cipher.decode_raw(&vector.ciphertext)?, vector.plaintext);
        assert_eq!(cipher.decode(&vector.ciphertext)?, vector.plaintext);
    }
    Ok(())
}

#[test]
fn kat_concatenated_blocks() -> tinytea::Result<()> {
    // ECB: a multi-block message is the per-block vectors laid end to end
    let key = Key::from_bytes(&hex!("000102030405060708090a0b0c0d0e0f"));
    let plaintext = hex!("4142434445464748 4141414141414141 5a5b6e278948d77f");
    let ciphertext = hex!("497df3d072612cb5 e78f2d13744341d8 4141414141414141");

    let cipher = Cipher::new(&key);
    assert_eq!(cipher.encode(&plaintext), ciphertext);
    assert_eq!(cipher.decode(&ciphertext)?, plaintext);
    Ok(())
}

#[test]
fn kat_empty_message() -> tinytea::Result<()> {
    let cipher = Cipher::new(&Key::from_bytes(&[0u8; 16]));
    let ciphertext = cipher.encode(&[]);
    assert_eq!(ciphertext, hex!("dee9d4d8f7131ed9"));
    assert!(cipher.decode(&ciphertext)?.is_empty());
    Ok(())
}
