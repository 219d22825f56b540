//! x86-64-v3: AVX, AVX2, BMI1, BMI2, F16C, FMA, LZCNT and OSXSAVE.

/// Sorted v3 mnemonic table.
pub static V3: &[&str] = &[
    "ANDN", "BEXTR", "BLSI", "BLSMSK", "BLSR", "BZHI", "LZCNT", "MULX", "OSXSAVE", "PDEP",
    "PEXT", "RORX", "SARX", "SHLX", "SHRX", "TZCNT", "VADDPD", "VADDPS", "VADDSD", "VADDSS",
    "VADDSUBPD", "VADDSUBPS", "VANDNPD", "VANDNPS", "VANDPD", "VANDPS", "VBLENDPD", "VBLENDPS",
    "VBLENDVPD", "VBLENDVPS", "VBROADCASTF128", "VBROADCASTI128", "VBROADCASTSD",
    "VBROADCASTSS", "VCMPPD", "VCMPPS", "VCMPSD", "VCMPSS", "VCOMISD", "VCOMISS", "VCVTDQ2PD",
    "VCVTDQ2PS", "VCVTPD2DQ", "VCVTPD2PS", "VCVTPH2PS", "VCVTPS2DQ", "VCVTPS2PD", "VCVTPS2PH",
    "VCVTSD2SI", "VCVTSD2SS", "VCVTSI2SD", "VCVTSI2SS", "VCVTSS2SD", "VCVTSS2SI", "VCVTTPD2DQ",
    "VCVTTPS2DQ", "VCVTTSD2SI", "VCVTTSS2SI", "VDIVPD", "VDIVPS", "VDIVSD", "VDIVSS", "VDPPD",
    "VDPPS", "VEXTRACTF128", "VEXTRACTI128", "VEXTRACTPS", "VFMADD132PD", "VFMADD132PS",
    "VFMADD132SD", "VFMADD132SS", "VFMADD213PD", "VFMADD213PS", "VFMADD213SD", "VFMADD213SS",
    "VFMADD231PD", "VFMADD231PS", "VFMADD231SD", "VFMADD231SS", "VFMADDSUB132PD",
    "VFMADDSUB132PS", "VFMADDSUB213PD", "VFMADDSUB213PS", "VFMADDSUB231PD", "VFMADDSUB231PS",
    "VFMSUB132PD", "VFMSUB132PS", "VFMSUB132SD", "VFMSUB132SS", "VFMSUB213PD", "VFMSUB213PS",
    "VFMSUB213SD", "VFMSUB213SS", "VFMSUB231PD", "VFMSUB231PS", "VFMSUB231SD", "VFMSUB231SS",
    "VFMSUBADD132PD", "VFMSUBADD132PS", "VFMSUBADD213PD", "VFMSUBADD213PS", "VFMSUBADD231PD",
    "VFMSUBADD231PS", "VFNMADD132PD", "VFNMADD132PS", "VFNMADD132SD", "VFNMADD132SS",
    "VFNMADD213PD", "VFNMADD213PS", "VFNMADD213SD", "VFNMADD213SS", "VFNMADD231PD",
    "VFNMADD231PS", "VFNMADD231SD", "VFNMADD231SS", "VFNMSUB132PD", "VFNMSUB132PS",
    "VFNMSUB132SD", "VFNMSUB132SS", "VFNMSUB213PD", "VFNMSUB213PS", "VFNMSUB213SD",
    "VFNMSUB213SS", "VFNMSUB231PD", "VFNMSUB231PS", "VFNMSUB231SD", "VFNMSUB231SS",
    "VGATHERDPD", "VGATHERDPS", "VGATHERQPD", "VGATHERQPS", "VHADDPD", "VHADDPS", "VHSUBPD",
    "VHSUBPS", "VINSERTF128", "VINSERTI128", "VINSERTPS", "VLDDQU", "VLDMXCSR", "VMASKMOVDQU",
    "VMASKMOVPD", "VMASKMOVPS", "VMAXPD", "VMAXPS", "VMAXSD", "VMAXSS", "VMINPD", "VMINPS",
    "VMINSD", "VMINSS", "VMOVAPD", "VMOVAPS", "VMOVD", "VMOVDDUP", "VMOVDQA", "VMOVDQU",
    "VMOVHLPS", "VMOVHPD", "VMOVHPS", "VMOVLHPS", "VMOVLPD", "VMOVLPS", "VMOVMSKPD",
    "VMOVMSKPS", "VMOVNTDQ", "VMOVNTDQA", "VMOVNTPD", "VMOVNTPS", "VMOVQ", "VMOVSD",
    "VMOVSHDUP", "VMOVSLDUP", "VMOVSS", "VMOVUPD", "VMOVUPS", "VMPSADBW", "VMULPD", "VMULPS",
    "VMULSD", "VMULSS", "VORPD", "VORPS", "VPABSB", "VPABSD", "VPABSW", "VPACKSSDW",
    "VPACKSSWB", "VPACKUSDW", "VPACKUSWB", "VPADDB", "VPADDD", "VPADDQ", "VPADDSB", "VPADDSW",
    "VPADDUSB", "VPADDUSW", "VPADDW", "VPALIGNR", "VPAND", "VPANDN", "VPAVGB", "VPAVGW",
    "VPBLENDD", "VPBLENDVB", "VPBLENDW", "VPBROADCASTB", "VPBROADCASTD", "VPBROADCASTQ",
    "VPBROADCASTW", "VPCMPEQB", "VPCMPEQD", "VPCMPEQQ", "VPCMPEQW", "VPCMPESTRI", "VPCMPESTRM",
    "VPCMPGTB", "VPCMPGTD", "VPCMPGTQ", "VPCMPGTW", "VPCMPISTRI", "VPCMPISTRM", "VPERM2F128",
    "VPERM2I128", "VPERMD", "VPERMILPD", "VPERMILPS", "VPERMPD", "VPERMPS", "VPERMQ", "VPEXTRB",
    "VPEXTRD", "VPEXTRQ", "VPEXTRW", "VPGATHERDD", "VPGATHERDQ", "VPGATHERQD", "VPGATHERQQ",
    "VPHADDD", "VPHADDSW", "VPHADDW", "VPHMINPOSUW", "VPHSUBD", "VPHSUBSW", "VPHSUBW",
    "VPINSRB", "VPINSRD", "VPINSRQ", "VPINSRW", "VPMADDUBSW", "VPMADDWD", "VPMASKMOVD",
    "VPMASKMOVQ", "VPMAXSB", "VPMAXSD", "VPMAXSW", "VPMAXUB", "VPMAXUD", "VPMAXUW", "VPMINSB",
    "VPMINSD", "VPMINSW", "VPMINUB", "VPMINUD", "VPMINUW", "VPMOVMSKB", "VPMOVSXBD",
    "VPMOVSXBQ", "VPMOVSXBW", "VPMOVSXDQ", "VPMOVSXWD", "VPMOVSXWQ", "VPMOVZXBD", "VPMOVZXBQ",
    "VPMOVZXBW", "VPMOVZXDQ", "VPMOVZXWD", "VPMOVZXWQ", "VPMULDQ", "VPMULHRSW", "VPMULHUW",
    "VPMULHW", "VPMULLD", "VPMULLW", "VPMULUDQ", "VPOR", "VPSADBW", "VPSHUFB", "VPSHUFD",
    "VPSHUFHW", "VPSHUFLW", "VPSIGNB", "VPSIGND", "VPSIGNW", "VPSLLD", "VPSLLDQ", "VPSLLQ",
    "VPSLLVD", "VPSLLVQ", "VPSLLW", "VPSRAD", "VPSRAVD", "VPSRAW", "VPSRLD", "VPSRLDQ",
    "VPSRLQ", "VPSRLVD", "VPSRLVQ", "VPSRLW", "VPSUBB", "VPSUBD", "VPSUBQ", "VPSUBSB",
    "VPSUBSW", "VPSUBUSB", "VPSUBUSW", "VPSUBW", "VPTEST", "VPUNPCKHBW", "VPUNPCKHDQ",
    "VPUNPCKHQDQ", "VPUNPCKHWD", "VPUNPCKLBW", "VPUNPCKLDQ", "VPUNPCKLQDQ", "VPUNPCKLWD",
    "VPXOR", "VRCPPS", "VRCPSS", "VROUNDPD", "VROUNDPS", "VROUNDSD", "VROUNDSS", "VRSQRTPS",
    "VRSQRTSS", "VSHUFPD", "VSHUFPS", "VSQRTPD", "VSQRTPS", "VSQRTSD", "VSQRTSS", "VSTMXCSR",
    "VSUBPD", "VSUBPS", "VSUBSD", "VSUBSS", "VTESTPD", "VTESTPS", "VUCOMISD", "VUCOMISS",
    "VUNPCKHPD", "VUNPCKHPS", "VUNPCKLPD", "VUNPCKLPS", "VXORPD", "VXORPS", "VZEROALL",
    "VZEROUPPER",
];
