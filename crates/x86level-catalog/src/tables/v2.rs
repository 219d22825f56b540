//! x86-64-v2: CMPXCHG16B, LAHF/SAHF, POPCNT, SSE3, SSSE3, SSE4.1 and SSE4.2.

/// Sorted v2 mnemonic table.
pub static V2: &[&str] = &[
    "ADDSUBPD", "ADDSUBPS", "BLENDPD", "BLENDPS", "BLENDVPD", "BLENDVPS", "CMPXCHG16B", "DPPD",
    "DPPS", "EXTRACTPS", "HADDPD", "HADDPS", "HSUBPD", "HSUBPS", "INSERTPS", "LAHF", "LDDQU",
    "MOVDDUP", "MOVNTDQA", "MOVSHDUP", "MOVSLDUP", "MPSADBW", "PABSB", "PABSD", "PABSW",
    "PACKUSDW", "PALIGNR", "PBLENDVB", "PBLENDW", "PCMPEQQ", "PCMPESTRI", "PCMPESTRM",
    "PCMPGTQ", "PCMPISTRI", "PCMPISTRM", "PEXTRB", "PEXTRD", "PEXTRQ", "PEXTRW", "PHADDD",
    "PHADDSW", "PHADDW", "PHMINPOSUW", "PHSUBD", "PHSUBSW", "PHSUBW", "PINSRB", "PINSRD",
    "PINSRQ", "PMADDUBSW", "PMAXSB", "PMAXSD", "PMAXUD", "PMAXUW", "PMINSB", "PMINSD", "PMINUD",
    "PMINUW", "PMOVSXBD", "PMOVSXBQ", "PMOVSXBW", "PMOVSXDQ", "PMOVSXWD", "PMOVSXWQ",
    "PMOVZXBD", "PMOVZXBQ", "PMOVZXBW", "PMOVZXDQ", "PMOVZXWD", "PMOVZXWQ", "PMULDQ",
    "PMULHRSW", "PMULLD", "POPCNT", "PSHUFB", "PSIGNB", "PSIGND", "PSIGNW", "PTEST", "ROUNDPD",
    "ROUNDPS", "ROUNDSD", "ROUNDSS", "SAHF",
];
