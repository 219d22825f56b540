//! Baseline x86-64: general purpose, x87, MMX, SSE and SSE2 mnemonics.

/// Sorted v1 mnemonic table.
pub static V1: &[&str] = &[
    "AAA", "AAD", "AAM", "AAS", "ADC", "ADD", "ADDPD", "ADDPS", "ADDSD", "ADDSS", "AND",
    "ANDNPD", "ANDNPS", "ANDPD", "ANDPS", "ARPL", "BOUND", "BSF", "BSR", "BSWAP", "BT", "BTC",
    "BTR", "BTS", "CALL", "CBW", "CDQ", "CDQE", "CLC", "CLD", "CLFLUSH", "CLI", "CLTS", "CMC",
    "CMOVA", "CMOVAE", "CMOVB", "CMOVBE", "CMOVC", "CMOVE", "CMOVG", "CMOVGE", "CMOVL",
    "CMOVLE", "CMOVNA", "CMOVNAE", "CMOVNB", "CMOVNBE", "CMOVNC", "CMOVNE", "CMOVNG", "CMOVNGE",
    "CMOVNL", "CMOVNLE", "CMOVNO", "CMOVNP", "CMOVNS", "CMOVNZ", "CMOVO", "CMOVP", "CMOVPE",
    "CMOVPO", "CMOVS", "CMOVZ", "CMP", "CMPPD", "CMPPS", "CMPS", "CMPSB", "CMPSD", "CMPSD_XMM",
    "CMPSQ", "CMPSS", "CMPSW", "CMPXCHG", "CMPXCHG16B", "CMPXCHG8B", "COMISD", "COMISS",
    "CPUID", "CQO", "CRC32", "CVTDQ2PD", "CVTDQ2PS", "CVTPD2DQ", "CVTPD2PI", "CVTPD2PS",
    "CVTPI2PD", "CVTPI2PS", "CVTPS2DQ", "CVTPS2PD", "CVTPS2PI", "CVTSD2SI", "CVTSD2SS",
    "CVTSI2SD", "CVTSI2SS", "CVTSS2SD", "CVTSS2SI", "CVTTPD2DQ", "CVTTPD2PI", "CVTTPS2DQ",
    "CVTTPS2PI", "CVTTSD2SI", "CVTTSS2SI", "CWD", "CWDE", "DAA", "DAS", "DEC", "DIV", "DIVPD",
    "DIVPS", "DIVSD", "DIVSS", "EMMS", "ENTER", "F2XM1", "FABS", "FADD", "FADDP", "FBLD",
    "FBSTP", "FCHS", "FCLEX", "FCMOVB", "FCMOVBE", "FCMOVE", "FCMOVNB", "FCMOVNBE", "FCMOVNE",
    "FCMOVNU", "FCMOVU", "FCOM", "FCOMI", "FCOMIP", "FCOMP", "FCOMPP", "FCOS", "FDECSTP",
    "FDIV", "FDIVP", "FDIVR", "FDIVRP", "FFREE", "FFREEP", "FIADD", "FICOM", "FICOMP", "FIDIV",
    "FIDIVR", "FILD", "FIMUL", "FINCSTP", "FINIT", "FIST", "FISTP", "FISTTP", "FISUB", "FISUBR",
    "FLD", "FLD1", "FLDCW", "FLDENV", "FLDL2E", "FLDL2T", "FLDLG2", "FLDLN2", "FLDPI", "FLDZ",
    "FMUL", "FMULP", "FNCLEX", "FNINIT", "FNOP", "FNSAVE", "FNSTCW", "FNSTENV", "FNSTSW",
    "FPATAN", "FPREM", "FPREM1", "FPTAN", "FRNDINT", "FRSTOR", "FSAVE", "FSCALE", "FSIN",
    "FSINCOS", "FSQRT", "FST", "FSTCW", "FSTENV", "FSTP", "FSTSW", "FSUB", "FSUBP", "FSUBR",
    "FSUBRP", "FTST", "FUCOM", "FUCOMI", "FUCOMIP", "FUCOMP", "FUCOMPP", "FWAIT", "FXAM",
    "FXCH", "FXRSTOR", "FXRSTOR64", "FXSAVE", "FXSAVE64", "FXTRACT", "FYL2X", "FYL2XP1", "HLT",
    "ICEBP", "IDIV", "IMUL", "IN", "INC", "INS", "INSB", "INSD", "INSW", "INT", "INTO", "INVD",
    "INVLPG", "IRET", "IRETD", "IRETQ", "JA", "JAE", "JB", "JBE", "JC", "JCXZ", "JE", "JECXZ",
    "JG", "JGE", "JL", "JLE", "JMP", "JNA", "JNAE", "JNB", "JNBE", "JNC", "JNE", "JNG", "JNGE",
    "JNL", "JNLE", "JNO", "JNP", "JNS", "JNZ", "JO", "JP", "JPE", "JPO", "JRCXZ", "JS", "JZ",
    "LAHF", "LAR", "LCALL", "LDMXCSR", "LDS", "LEA", "LEAVE", "LES", "LFENCE", "LFS", "LGDT",
    "LGS", "LIDT", "LJMP", "LLDT", "LMSW", "LOCK", "LODS", "LODSB", "LODSD", "LODSQ", "LODSW",
    "LOOP", "LOOPE", "LOOPNE", "LRET", "LSL", "LSS", "LTR", "MASKMOVDQU", "MASKMOVQ", "MAXPD",
    "MAXPS", "MAXSD", "MAXSS", "MFENCE", "MINPD", "MINPS", "MINSD", "MINSS", "MONITOR", "MOV",
    "MOVAPD", "MOVAPS", "MOVBE", "MOVD", "MOVDQ2Q", "MOVDQA", "MOVDQU", "MOVHLPS", "MOVHPD",
    "MOVHPS", "MOVLHPS", "MOVLPD", "MOVLPS", "MOVMSKPD", "MOVMSKPS", "MOVNTDQ", "MOVNTI",
    "MOVNTPD", "MOVNTPS", "MOVNTQ", "MOVNTSD", "MOVNTSS", "MOVQ", "MOVQ2DQ", "MOVS", "MOVSB",
    "MOVSD", "MOVSD_XMM", "MOVSQ", "MOVSS", "MOVSW", "MOVSX", "MOVSXD", "MOVUPD", "MOVUPS",
    "MOVZX", "MUL", "MULPD", "MULPS", "MULSD", "MULSS", "MWAIT", "NEG", "NOP", "NOT", "OR",
    "ORPD", "ORPS", "OUT", "OUTS", "OUTSB", "OUTSD", "OUTSW", "PACKSSDW", "PACKSSWB",
    "PACKUSWB", "PADDB", "PADDD", "PADDQ", "PADDSB", "PADDSW", "PADDUSB", "PADDUSW", "PADDW",
    "PAND", "PANDN", "PAUSE", "PAVGB", "PAVGW", "PCMPEQB", "PCMPEQD", "PCMPEQW", "PCMPGTB",
    "PCMPGTD", "PCMPGTW", "PEXTRW", "PINSRW", "PMADDWD", "PMAXSW", "PMAXUB", "PMINSW", "PMINUB",
    "PMOVMSKB", "PMULHUW", "PMULHW", "PMULLW", "PMULUDQ", "POP", "POPA", "POPAD", "POPF",
    "POPFD", "POPFQ", "POR", "PREFETCHNTA", "PREFETCHT0", "PREFETCHT1", "PREFETCHT2", "PSADBW",
    "PSHUFD", "PSHUFHW", "PSHUFLW", "PSHUFW", "PSLLD", "PSLLDQ", "PSLLQ", "PSLLW", "PSRAD",
    "PSRAW", "PSRLD", "PSRLDQ", "PSRLQ", "PSRLW", "PSUBB", "PSUBD", "PSUBQ", "PSUBSB", "PSUBSW",
    "PSUBUSB", "PSUBUSW", "PSUBW", "PUNPCKHBW", "PUNPCKHDQ", "PUNPCKHQDQ", "PUNPCKHWD",
    "PUNPCKLBW", "PUNPCKLDQ", "PUNPCKLQDQ", "PUNPCKLWD", "PUSH", "PUSHA", "PUSHAD", "PUSHF",
    "PUSHFD", "PUSHFQ", "PXOR", "RCL", "RCPPS", "RCPSS", "RCR", "RDMSR", "RDPMC", "RDTSC",
    "RDTSCP", "REP", "REPE", "RET", "ROL", "ROR", "RSM", "RSQRTPS", "RSQRTSS", "SAHF", "SAL",
    "SAR", "SBB", "SCAS", "SCASB", "SCASD", "SCASQ", "SCASW", "SETA", "SETAE", "SETB", "SETBE",
    "SETC", "SETE", "SETG", "SETGE", "SETL", "SETLE", "SETNA", "SETNAE", "SETNB", "SETNBE",
    "SETNC", "SETNE", "SETNG", "SETNGE", "SETNL", "SETNLE", "SETNO", "SETNP", "SETNS", "SETNZ",
    "SETO", "SETP", "SETPE", "SETPO", "SETS", "SETZ", "SFENCE", "SGDT", "SHL", "SHLD", "SHR",
    "SHRD", "SHUFPD", "SHUFPS", "SIDT", "SLDT", "SMSW", "SQRTPD", "SQRTPS", "SQRTSD", "SQRTSS",
    "STC", "STD", "STI", "STMXCSR", "STOS", "STOSB", "STOSD", "STOSQ", "STOSW", "STR", "SUB",
    "SUBPD", "SUBPS", "SUBSD", "SUBSS", "SWAPGS", "SYSCALL", "SYSENTER", "SYSEXIT", "SYSRET",
    "TEST", "UCOMISD", "UCOMISS", "UD0", "UD1", "UD2", "UNPCKHPD", "UNPCKHPS", "UNPCKLPD",
    "UNPCKLPS", "VERR", "VERW", "WAIT", "WBINVD", "WRMSR", "XADD", "XCHG", "XGETBV", "XLAT",
    "XLATB", "XOR", "XORPD", "XORPS", "XRSTOR", "XRSTOR64", "XRSTORS", "XRSTORS64", "XSAVE",
    "XSAVE64", "XSAVEC", "XSAVEC64", "XSAVES", "XSAVES64", "XSETBV",
];
