//! x86-64-v4: AVX-512 F/BW/CD/DQ/VL, including opmask (K) instructions and
//! the EVEX forms of AVX mnemonics.

/// Sorted v4 mnemonic table.
pub static V4: &[&str] = &[
    "KADDB", "KADDD", "KADDQ", "KADDW", "KANDB", "KANDD", "KANDNB", "KANDND", "KANDNQ",
    "KANDNW", "KANDQ", "KANDW", "KMOVB", "KMOVD", "KMOVQ", "KMOVW", "KNOTB", "KNOTD", "KNOTQ",
    "KNOTW", "KORB", "KORD", "KORQ", "KORTESTB", "KORTESTD", "KORTESTQ", "KORTESTW", "KORW",
    "KSHIFTLB", "KSHIFTLD", "KSHIFTLQ", "KSHIFTLW", "KSHIFTRB", "KSHIFTRD", "KSHIFTRQ",
    "KSHIFTRW", "KTESTB", "KTESTD", "KTESTQ", "KTESTW", "KUNPCKBW", "KUNPCKDQ", "KUNPCKWD",
    "KXNORB", "KXNORD", "KXNORQ", "KXNORW", "KXORB", "KXORD", "KXORQ", "KXORW", "VADDPD",
    "VADDPS", "VADDSD", "VADDSS", "VALIGND", "VALIGNQ", "VANDNPD", "VANDNPS", "VANDPD",
    "VANDPS", "VBLENDMPD", "VBLENDMPS", "VBROADCASTF32X2", "VBROADCASTF32X4", "VBROADCASTF32X8",
    "VBROADCASTF64X2", "VBROADCASTF64X4", "VBROADCASTI32X2", "VBROADCASTI32X4",
    "VBROADCASTI32X8", "VBROADCASTI64X2", "VBROADCASTI64X4", "VBROADCASTSD", "VBROADCASTSS",
    "VCMPPD", "VCMPPS", "VCMPSD", "VCMPSS", "VCOMISD", "VCOMISS", "VCOMPRESSPD", "VCOMPRESSPS",
    "VCVTDQ2PD", "VCVTDQ2PS", "VCVTPD2DQ", "VCVTPD2DQX", "VCVTPD2DQY", "VCVTPD2PS",
    "VCVTPD2PSX", "VCVTPD2PSY", "VCVTPD2QQ", "VCVTPD2UDQ", "VCVTPD2UDQX", "VCVTPD2UDQY",
    "VCVTPD2UQQ", "VCVTPH2PS", "VCVTPS2DQ", "VCVTPS2PD", "VCVTPS2PH", "VCVTPS2QQ", "VCVTPS2UDQ",
    "VCVTPS2UQQ", "VCVTQQ2PD", "VCVTQQ2PS", "VCVTQQ2PSX", "VCVTQQ2PSY", "VCVTSD2SI",
    "VCVTSD2SS", "VCVTSD2USIL", "VCVTSD2USIQ", "VCVTSI2SDL", "VCVTSI2SDQ", "VCVTSI2SSL",
    "VCVTSS2SD", "VCVTSS2SI", "VCVTSS2USIL", "VCVTSS2USIQ", "VCVTTPD2DQ", "VCVTTPD2DQX",
    "VCVTTPD2DQY", "VCVTTPD2QQ", "VCVTTPD2UDQ", "VCVTTPD2UDQX", "VCVTTPD2UDQY", "VCVTTPD2UQQ",
    "VCVTTPS2DQ", "VCVTTPS2QQ", "VCVTTPS2UDQ", "VCVTTPS2UQQ", "VCVTTSD2SI", "VCVTTSD2USIL",
    "VCVTTSD2USIQ", "VCVTTSS2SI", "VCVTTSS2SIQ", "VCVTTSS2USIL", "VCVTTSS2USIQ", "VCVTUDQ2PD",
    "VCVTUDQ2PS", "VCVTUQQ2PD", "VCVTUQQ2PS", "VCVTUQQ2PSX", "VCVTUQQ2PSY", "VCVTUSI2SDL",
    "VCVTUSI2SDQ", "VCVTUSI2SSL", "VCVTUSI2SSQ", "VDBPSADBW", "VDIVPD", "VDIVPS", "VDIVSD",
    "VDIVSS", "VEXPANDPD", "VEXPANDPS", "VEXTRACTF32X4", "VEXTRACTF32X8", "VEXTRACTF64X2",
    "VEXTRACTF64X4", "VEXTRACTI32X4", "VEXTRACTI32X8", "VEXTRACTI64X2", "VEXTRACTI64X4",
    "VFIXUPIMMPD", "VFIXUPIMMPS", "VFIXUPIMMSD", "VFIXUPIMMSS", "VFMADD132PD", "VFMADD132PS",
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
    "VFPCLASSPDX", "VFPCLASSPDY", "VFPCLASSPDZ", "VFPCLASSPSX", "VFPCLASSPSY", "VFPCLASSPSZ",
    "VFPCLASSSD", "VFPCLASSSS", "VGATHERDPD", "VGATHERDPS", "VGATHERQPD", "VGATHERQPS",
    "VGETEXPPD", "VGETEXPPS", "VGETEXPSD", "VGETEXPSS", "VGETMANTPD", "VGETMANTPS",
    "VGETMANTSD", "VGETMANTSS", "VINSERTF32X4", "VINSERTF32X8", "VINSERTF64X2", "VINSERTF64X4",
    "VINSERTI32X4", "VINSERTI32X8", "VINSERTI64X2", "VINSERTI64X4", "VMAXPD", "VMAXPS",
    "VMAXSD", "VMAXSS", "VMINPD", "VMINPS", "VMINSD", "VMINSS", "VMOVAPD", "VMOVAPS",
    "VMOVDDUP", "VMOVDQA32", "VMOVDQA64", "VMOVDQU16", "VMOVDQU32", "VMOVDQU64", "VMOVDQU8",
    "VMOVHPS", "VMOVLHPS", "VMOVNTDQ", "VMOVNTDQA", "VMOVNTPD", "VMOVNTPS", "VMOVSD",
    "VMOVSHDUP", "VMOVSLDUP", "VMOVSS", "VMOVUPD", "VMOVUPS", "VMULPD", "VMULPS", "VMULSD",
    "VMULSS", "VORPD", "VORPS", "VPABSB", "VPABSD", "VPABSQ", "VPABSW", "VPACKSSDW",
    "VPACKSSWB", "VPACKUSDW", "VPACKUSWB", "VPADDB", "VPADDD", "VPADDQ", "VPADDSB", "VPADDSW",
    "VPADDUSB", "VPADDUSW", "VPADDW", "VPALIGNR", "VPANDD", "VPANDND", "VPANDNQ", "VPANDQ",
    "VPAVGB", "VPAVGW", "VPBLENDMB", "VPBLENDMD", "VPBLENDMQ", "VPBLENDMW", "VPBROADCASTB",
    "VPBROADCASTD", "VPBROADCASTMB2Q", "VPBROADCASTMW2D", "VPBROADCASTQ", "VPBROADCASTW",
    "VPCMPB", "VPCMPD", "VPCMPEQB", "VPCMPEQD", "VPCMPEQQ", "VPCMPEQW", "VPCMPGTB", "VPCMPGTD",
    "VPCMPGTQ", "VPCMPGTW", "VPCMPQ", "VPCMPUB", "VPCMPUD", "VPCMPUQ", "VPCMPUW", "VPCMPW",
    "VPCOMPRESSD", "VPCOMPRESSQ", "VPCONFLICTD", "VPCONFLICTQ", "VPERMD", "VPERMI2D",
    "VPERMI2PD", "VPERMI2PS", "VPERMI2Q", "VPERMI2W", "VPERMILPD", "VPERMILPS", "VPERMPD",
    "VPERMPS", "VPERMQ", "VPERMT2D", "VPERMT2PD", "VPERMT2PS", "VPERMT2Q", "VPERMT2W", "VPERMW",
    "VPEXPANDD", "VPEXPANDQ", "VPEXTRB", "VPEXTRD", "VPEXTRQ", "VPGATHERDD", "VPGATHERDQ",
    "VPGATHERQD", "VPGATHERQQ", "VPINSRD", "VPINSRQ", "VPLZCNTD", "VPLZCNTQ", "VPMADDUBSW",
    "VPMADDWD", "VPMAXSB", "VPMAXSD", "VPMAXSQ", "VPMAXSW", "VPMAXUB", "VPMAXUD", "VPMAXUQ",
    "VPMAXUW", "VPMINSB", "VPMINSD", "VPMINSQ", "VPMINSW", "VPMINUB", "VPMINUD", "VPMINUQ",
    "VPMINUW", "VPMOVB2M", "VPMOVD2M", "VPMOVDB", "VPMOVDW", "VPMOVM2B", "VPMOVM2D", "VPMOVM2Q",
    "VPMOVM2W", "VPMOVQ2M", "VPMOVQB", "VPMOVQD", "VPMOVQW", "VPMOVSDB", "VPMOVSDW", "VPMOVSQB",
    "VPMOVSQD", "VPMOVSQW", "VPMOVSWB", "VPMOVSXBD", "VPMOVSXBQ", "VPMOVSXBW", "VPMOVSXDQ",
    "VPMOVSXWD", "VPMOVSXWQ", "VPMOVUSDB", "VPMOVUSDW", "VPMOVUSQB", "VPMOVUSQD", "VPMOVUSQW",
    "VPMOVUSWB", "VPMOVW2M", "VPMOVWB", "VPMOVZXBD", "VPMOVZXBQ", "VPMOVZXBW", "VPMOVZXDQ",
    "VPMOVZXWD", "VPMOVZXWQ", "VPMULDQ", "VPMULHRSW", "VPMULHUW", "VPMULHW", "VPMULLD",
    "VPMULLQ", "VPMULLW", "VPMULUDQ", "VPORD", "VPORQ", "VPROLD", "VPROLQ", "VPROLVD",
    "VPROLVQ", "VPRORD", "VPRORQ", "VPRORVD", "VPRORVQ", "VPSADBW", "VPSCATTERDD",
    "VPSCATTERDQ", "VPSCATTERQD", "VPSCATTERQQ", "VPSHUFB", "VPSHUFD", "VPSHUFHW", "VPSHUFLW",
    "VPSLLD", "VPSLLDQ", "VPSLLQ", "VPSLLVD", "VPSLLVQ", "VPSLLVW", "VPSLLW", "VPSRAD",
    "VPSRAQ", "VPSRAVD", "VPSRAVQ", "VPSRAVW", "VPSRAW", "VPSRLD", "VPSRLDQ", "VPSRLQ",
    "VPSRLVD", "VPSRLVQ", "VPSRLVW", "VPSRLW", "VPSUBB", "VPSUBD", "VPSUBQ", "VPSUBSB",
    "VPSUBSW", "VPSUBUSB", "VPSUBUSW", "VPSUBW", "VPTERNLOGD", "VPTERNLOGQ", "VPTESTMB",
    "VPTESTMD", "VPTESTMQ", "VPTESTMW", "VPTESTNMB", "VPTESTNMD", "VPTESTNMQ", "VPTESTNMW",
    "VPUNPCKHBW", "VPUNPCKHDQ", "VPUNPCKHQDQ", "VPUNPCKHWD", "VPUNPCKLBW", "VPUNPCKLDQ",
    "VPUNPCKLQDQ", "VPUNPCKLWD", "VPXORD", "VPXORQ", "VRANGEPD", "VRANGEPS", "VRANGESD",
    "VRANGESS", "VRCP14PD", "VRCP14PS", "VRCP14SD", "VRCP14SS", "VREDUCEPD", "VREDUCEPS",
    "VREDUCESD", "VREDUCESS", "VRNDSCALEPD", "VRNDSCALEPS", "VRNDSCALESD", "VRNDSCALESS",
    "VRSQRT14PD", "VRSQRT14PS", "VRSQRT14SD", "VRSQRT14SS", "VSCALEFPD", "VSCALEFPS",
    "VSCALEFSD", "VSCALEFSS", "VSCATTERDPD", "VSCATTERDPS", "VSCATTERQPD", "VSCATTERQPS",
    "VSHUFF32X4", "VSHUFF64X2", "VSHUFI32X4", "VSHUFI64X2", "VSHUFPD", "VSHUFPS", "VSQRTPD",
    "VSQRTPS", "VSQRTSD", "VSQRTSS", "VSUBPD", "VSUBPS", "VSUBSD", "VSUBSS", "VUCOMISD",
    "VUCOMISS", "VUNPCKHPD", "VUNPCKHPS", "VUNPCKLPD", "VUNPCKLPS", "VXORPD", "VXORPS",
];
