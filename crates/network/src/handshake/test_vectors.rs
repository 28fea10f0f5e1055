// Copyright @ 2023 - 2024, Aurum Developers
// All Rights Reserved

//! Fixed keys, nonces and handshake packets shared by the handshake tests.
//!
//! `KEY_A` initiates and `KEY_B` responds. `EPH_A`/`NONCE_A` and `EPH_B`/`NONCE_B` are
//! the ephemeral keys and nonces used by every packet below, so any pairing of an
//! auth with an ack derives `AES_SECRET` and `MAC_SECRET`.

use hex_literal::hex;

pub(crate) const KEY_A: [u8; 32] = hex!(
    "49a7b37aa6f6645917e7b807e9d1c00d4fa71f18343b0d4122a4d2df64dd6fee"
);

pub(crate) const KEY_B: [u8; 32] = hex!(
    "b71c71a67e1177ad4e901695e1b4b9ee17ae16c6668d313eac2f96dbcda3f291"
);

pub(crate) const EPH_A: [u8; 32] = hex!(
    "869d6ecf5211f1cc60418a13b9d870b22959d0c16f02bec714c960dd2298a32d"
);

pub(crate) const EPH_B: [u8; 32] = hex!(
    "e238eb8e04fee6511ab04c6dd3c89ce097b11f25d584863ac2b6d5b35b1847e4"
);

pub(crate) const NONCE_A: [u8; 32] = hex!(
    "7e968bba13b6c50e2c4cd7f241cc0d64d1ac25c7f5952df231ac6a2bda8ee5d6"
);

pub(crate) const NONCE_B: [u8; 32] = hex!(
    "559aead08264d5795d3909718cdd05abd49572e84fe55590eef31a88a08fdffd"
);

pub(crate) const PUB_A: [u8; 64] = hex!(
    "fda1cff674c90c9a197539fe3dfb53086ace64f83ed7c6eabec741f7f381cc80"
    "3e52ab2cd55d5569bce4347107a310dfd5f88a010cd2ffd1005ca406f1842877"
);

pub(crate) const EPH_B_PUB: [u8; 64] = hex!(
    "b6d82fa3409da933dbf9cb0140c5dde89f4e64aec88d476af648880f4a10e1e4"
    "9fe35ef3e69e93dd300b4797765a747c6384a6ecf5db9c2690398607a86181e4"
);

/// Signature carried by every auth packet below.
pub(crate) const AUTH_SIGNATURE: [u8; 65] = hex!(
    "9377c312145a5afb911bf9e8c067bcf6094c533603687850df502b61290bbf5e"
    "46faa4841968694f95d9be45dce498ce802dc46884738ced9f5e67db3b381011"
    "00"
);

pub(crate) const AES_SECRET: [u8; 32] = hex!(
    "80e8632c05fed6fc2a13b0f8d31a3cf645366239170ea067065aba8e28bac487"
);

pub(crate) const MAC_SECRET: [u8; 32] = hex!(
    "2ea74ec5dae199227dff1af715362700e989d889d7a493cb0639691efb8e5f98"
);

/// Responder ingress MAC digest after `AUTH_EIP8_2` and the bytes "foo".
pub(crate) const RESPONDER_INGRESS_FOO: [u8; 32] = hex!(
    "6a8e50de35bc440e99432c88fa22f44460b51dcd2424b864b75076ff094b251a"
);

/// Responder ingress MAC digest after `AUTH_LEGACY` and the bytes "foo".
pub(crate) const RESPONDER_INGRESS_FOO_LEGACY: [u8; 32] = hex!(
    "d0626289bff970c31bd80c094b936c722ff5e0a988a433f02a3c5f484da88e9b"
);

/// Initiator ingress MAC digest after `ACK_EIP8_REFERENCE` and the bytes "foo".
pub(crate) const INITIATOR_INGRESS_FOO: [u8; 32] = hex!(
    "64f0b10a107ff6f066a9e0a48a47230e1ab816b85584cdcf3364c42ae6e4c75a"
);

/// Pre-EIP-8 auth sealed to `KEY_B`.
pub(crate) const AUTH_LEGACY: [u8; 307] = hex!(
    "04762b65422449bd2fc66f9bd7b499e1094f8492e7dada3ae5fa55fc13edc242"
    "28055c01efabf7c51e420ae4cd91edcd6833a46c8e25bdabdc77f15e9a36b7d6"
    "661515151515151515151515151515151591cbaaef5f8429660515ff40ef6209"
    "8695f9b8d3a65a34bb5d4cf25a98b70470334da46ac307806ec1a88e2a0c3d31"
    "80cccc2214a7c274beed17b82d1b8019d60fc912a7a0b9869b4ba3bedce07a51"
    "d2af997f324b3aba856838cf5c65ce16bee29cf49271af5feba61bd67a1fb220"
    "d2ae66cdc1247a38151b262d862c03db4eeab957522b16bb04769e18f3c35346"
    "fd21878b5ec6865e48335cf97dffad97232cb7c7f9e37c723030a1ef02c4da34"
    "de8579f42962e8525e9c05eec702e13ecf5ad3d3f8d5d80c1937771524c55d27"
    "11c946de53982f9664bd9f09146e14f0870649"
);

/// Pre-EIP-8 ack sealed to `KEY_A`.
pub(crate) const ACK_LEGACY: [u8; 210] = hex!(
    "0467d50d7e80484daeeffd8c03f5554165e5ebd0828e7823d096907b62c1a8ff"
    "713b0453644040ed4b892409e5b86e31b31b5259ae927af715e9f956fbcd3e47"
    "9816161616161616161616161616161616e9f022566f2a740139066a9db2b9c4"
    "3f808c2ac30f8884833e58d6cfb712fea67d4e4f9fcdbe0efe4c2ba99ffd5f51"
    "99c32deaac95bf4ee3e97879149230092cad32d41aacdaabd2ed04ea2fdaa50b"
    "e4c41242f71cd48f47bd9138bd8bb8c2e6c77a36a90806f703a87b3799c9be27"
    "781f91045d6e03ba1fdab37ce99aebcafc67"
);

/// Version 4 ack from the EIP-8 reference vectors, with 275 bytes of padding.
pub(crate) const ACK_EIP8_REFERENCE: [u8; 492] = hex!(
    "01ea0451958701280a56482929d3b0757da8f7fbe5286784beead59d95089c21"
    "7c9b917788989470b0e330cc6e4fb383c0340ed85fab836ec9fb8a49672712ae"
    "abbdfd1e837c1ff4cace34311cd7f4de05d59279e3524ab26ef753a0095637ac"
    "88f2b499b9914b5f64e143eae548a1066e14cd2f4bd7f814c4652f11b254f8a2"
    "d0191e2f5546fae6055694aed14d906df79ad3b407d94692694e259191cde171"
    "ad542fc588fa2b7333313d82a9f887332f1dfc36cea03f831cb9a23fea05b33d"
    "eb999e85489e645f6aab1872475d488d7bd6c7c120caf28dbfc5d6833888155e"
    "d69d34dbdc39c1f299be1057810f34fbe754d021bfca14dc989753d61c413d26"
    "1934e1a9c67ee060a25eefb54e81a4d14baff922180c395d3f998d70f46f6b58"
    "306f969627ae364497e73fc27f6d17ae45a413d322cb8814276be6ddd13b885b"
    "201b943213656cde498fa0e9ddc8e0b8f8a53824fbd82254f3e2c17e8eaea009"
    "c38b4aa0a3f306e8797db43c25d68e86f262e564086f59a2fc60511c42abfb30"
    "57c247a8a8fe4fb3ccbadde17514b7ac8000cdb6a912778426260c47f38919a9"
    "1f25f4b5ffb455d6aaaf150f7e5529c100ce62d6d92826a71778d809bdf60232"
    "ae21ce8a437eca8223f45ac37f6487452ce626f549b3b5fdee26afd2072e4bc7"
    "5833c2464c805246155289f4"
);

/// Sealed auth with version 4 and 0 trailing list elements.
pub(crate) const AUTH_EIP8_0: [u8; 384] = hex!(
    "017e04f1cb351245d91f47dac838029ee6354bca3b613a021309dcf4ccd22e47"
    "7fdfba1978f6207a5bcf78d7ead8c6f9e0a811fc223fb5ff94981042d8c9e646"
    "569300010101010101010101010101010101012da66fbf932815e25d2bc30875"
    "05f5eb9db16f9597aed0ee858a382f5b2745c0283fc3afbdfa86900a8e2bf04f"
    "80ad24fc847491656d038d53a08712c5614abd95ec4d3cbb78ec39cdc79c6093"
    "f68a8d53f7db5fe4ef555cdf8a50939cbdd5142e2d1cd9fac951a7ddfdfe3093"
    "70e231067cdab85e43ff3ae05e32d21f91ca8b50576e151e094dead0c45f9c04"
    "3736a9edc8f00a45f4782cd20cf79de4419d8def0f5832d579aef5cca6786968"
    "f5ef7d27a8ef5d743afd95eff28be6e75adb4cff6881684879338e18e78d3715"
    "6d24ade3cfd1554848bac79fdbf06e4bb31c92dad7d54d8c131ecb6e3ccbc87c"
    "a0c3e4762628e51b8528d587508de76bcd141982a2bed249b54af74922aa9d5c"
    "ce476a52fa59dd12875c4e5093bf268b2b7d1f83408aff2d8965e5ca47f0524a"
);

/// Sealed auth with version 4 and 1 trailing list elements.
pub(crate) const AUTH_EIP8_1: [u8; 386] = hex!(
    "01800451e297bc46529246a36f8460f285d713b1e9ed672027eb3537806d5c7e"
    "7561775d56e44763bde166b456531d0094be0d7057081bedbbb89cbe8c473213"
    "eb0ad9020202020202020202020202020202028bcac9d4ce22cb06258f2a1806"
    "1d4d3bf1548277e8205aa9a1f36358a15a897a0ba687b066624d653171f1b43b"
    "078e94dfa859510de5813f52f5a8a6d4166f6e129eeb9da128bd7812ef474262"
    "910287e03ed028dba5617c8a0d4d4f09b4bfa2aa84f23cf490ff20b3c5bc652f"
    "622fd5edcd8b225c20ca5bf3dd7f0ab4ffcf39656e10004485f71645c89820c2"
    "2638245ea11b3e49bf0502f6a2efcf71bac109a8efac386c464829ebd60fa0d4"
    "726c8c67b4eca7eb7a4104e3a9fc2a10382296fecbc46db383cbba1b97c58963"
    "63cf68f75a68a96600a6dd9d489f0edb6ee3b567d8e16c0ed49ad188a1fb784e"
    "014785760a224c7f47280f3bfb10589e091cf33266b4a098b3785f33b6be1eeb"
    "9d83acac9b3111332d83cd41bdb12c3e80a495c3f09595a8f76cccd483923be5"
    "379d"
);

/// Sealed auth with version 56 and 2 trailing list elements.
pub(crate) const AUTH_EIP8_2: [u8; 392] = hex!(
    "0186049becfb181057b5556df2171b94e7ac0a4c17cbdfdb2240d9abf9538885"
    "91de6525a976ecb705406faf48f821171bbe8c6ab7c8c1cc6e4528e116e917fe"
    "7789a90303030303030303030303030303030311bfeaceed1d8bbdc42b1541d6"
    "7822c85ba534ebe64b70b46a76cf6377b27e15cb29aae69b5cb42e13f6e3830d"
    "7ace99eddb5ae0d9b9ca544ac4c87e502b255877fe24808564129387218a23c1"
    "dfa028d4e9c5c0a785f942da922fc99136a77af205f91597f52344105f71ebf7"
    "0abfb63fb93d71a0b8975084059b4ea369f50e1cb0ccec4a9324c4a6d81a8e6f"
    "78f6cfb0b4c4a252d9a820cfa0525baf160d840d13a5145d68bf4b7f8e91726c"
    "1593b1be8c4dd6cae9717190b4eb9a085c499c05d0bab7cb1158318d65fbef16"
    "d14e7914f38d6ee704c775fd6ea93d907a210d8d4a954ea60515b2971a924d1b"
    "e722511410dadd7c072a8b6dd772b1bad84d7497a0d8be5b73bca2899d79cc01"
    "f5f60dadc14a9cf8d0598eb9a26677fac8859b515b1fcd1d77a7f60170258bbe"
    "ccc8ae882a3d651e"
);

/// Sealed auth with version 57 and 3 trailing list elements.
pub(crate) const AUTH_EIP8_3: [u8; 422] = hex!(
    "01a404134e7e898b2be2648ef17d2f2b632635c3d984221db0869255cc1c1bba"
    "34613be28851d38bb10896c50dbce19730a8f9975d289bd354245fa996ef5b6b"
    "b1eb5f04040404040404040404040404040404ec99e3259656aaee18d32152ca"
    "c565d0b5ce4790e6ecad7d9125a9f477f50ba67d724afa5995269abc2b1fb093"
    "d72ae897eb2d827fcc0d199ffa7b3c998c83f83c9afcc5daa38596a18ddc389c"
    "439b3e02fb104423f90c05c5a59d10f47bc4e7c4537076d589682b5fb849449d"
    "3d77fb4af1eb088016d2b15864de2a420a217cc845dcc912eee2f4eb347b7987"
    "62e7f0a20ae3e78932a9f5a42f7217c60cc1616064cdd7b2983988d3cd1ba29a"
    "5ab3d790f1754fe3115334859b141d454ebf84e8eca9114e41cad1d6923f2ea0"
    "3b851240e49a4a612bb0a078813fbf9e96f136866f8074d6ee1ec02bcf8b2649"
    "d813476135885edbf64b304802366a8461c15834e1ac7533987406a76ea4cd8c"
    "ae6a74cd9e3e9df7566ca180977c373f3eb92e21f07df784ea181f97776734ca"
    "538b04d2121cb5f0c37647a5b425cdd722d46932999c5a352a1b6e480f6b142e"
    "ce562e608da0"
);

/// Sealed ack with version 4 and 0 trailing list elements.
pub(crate) const ACK_EIP8_0: [u8; 317] = hex!(
    "013b04e1a5b6302d3d348cfedd89b8dccc94da608ace997ba0d292ff9b12cf2b"
    "9cf76b42a5e6439a83ad612331fe71802c769d81f6e7760a219fea035de9dbf9"
    "bd426d0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b50330678f4295ff9a7d97d8d73"
    "27d6a5fc72d06da95743f4303f2e2f23a6cf47d1d067ef0fbc46710869a7258f"
    "687d3eec69a73f53cedb9ff80a63e1ace85659587def9d0a6d1e63a5c28bcc2b"
    "305c011863c7d04bb4541cc1c8f5178888bd23551a16b5edd42abbe2cf992703"
    "7d67f633e5c0f0aeb84f1672d7aa9b7dbdd39c331901fd5895b67cbdf1dc0914"
    "5c4fa3c7c7486879e8fd4369ff765b2ddfc1ea396ebb8ae9e7f423f307d1a42b"
    "3f56362fb6257490ef782a335e0cdeea05858f8016ca5f32291d163247da48e5"
    "01ddf269da505504603cf7866129b8775a0ffa5640674070eefc321d6a"
);

/// Sealed ack with version 4 and 1 trailing list elements.
pub(crate) const ACK_EIP8_1: [u8; 319] = hex!(
    "013d04a99e40549bc6f74fd3ddb6f5d9f6a6ddc77ebe934f716b2f88861f0350"
    "4ab1cb9832a2d65d7760fc0409598c4ba5f73a66a11947a2868bdf943a81320a"
    "8dfe640c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0cf0305103b3d719c72400b0d317"
    "5083aab8345558a777f9d5962f3fbb0d21ccaf4fa48303a0258506c33e80ba99"
    "7261ce7e8d76039a3e2a2b309ab2ba5ee47d62f2cdbfc73338bb51942c555868"
    "3f68c8d2e3463453629ed8605511fab4e0504536e43d8cb9e397ac3b45572932"
    "cb8a75817227dde84f96d1e56754cf4bad5c123c5214476d6e30e919f9e59ebd"
    "f0305362919c255d71abb19ec09ad2a882b61beffcf154747297c89a50df1878"
    "253e11eda27d908baf7e1614fe1ed770e8b9f36aad8ef8dc274e07dadcee9d5b"
    "462b14fb64cf595f81e25d7a03fd12ef20c8304b30fc644e9dbb921abcc030"
);

/// Sealed ack with version 56 and 2 trailing list elements.
pub(crate) const ACK_EIP8_2: [u8; 325] = hex!(
    "01430483bb6cb91f39be99cb821ebc0691a7c1511621a1dc7001a7866b012034"
    "ca7bccfbfaeb1cee33c35c3b27823a7d843a555e65dce39ba07885e4cde0d141"
    "d246f60d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0de979a323bb20e1334bc4f2ecdd"
    "5bef01d749a8bc6c6e8ece1ba747635dbeaa6f3d11f8afeb22992ad77c881637"
    "ad0fcd1959250fd7c408957fb21bd8d5833d1cf343cd6886070a71c728c75433"
    "7090949740cbb2ca9cf92d125c6db13d79c951c8bb89facb958608eae99fa94f"
    "999528a6f7605f804311ed4586e500f6bbc467fc7c655662c4bd64a5e2ffe010"
    "b6bed51d53e3a8e3c6413480f11d654d425e7fb5647a8ab666d0c8cc6d2a9e1e"
    "551da2dc35c2afb33d3aa45eebcc970a35f197c026b797d81e25ccf9973bfde2"
    "1e2b909114f7987470344346afcff429c4b3e8093a31aba334b805adf02429b0"
    "c75ada300d"
);

/// Sealed ack with version 57 and 3 trailing list elements.
pub(crate) const ACK_EIP8_3: [u8; 355] = hex!(
    "016104af73ff2833e698ddd8ef885b94e009c161a45e2c81d059e382860d5ce1"
    "e5f9a179c1f31c8ff2c15a07dff6c7ed026e80be472a99ca3318877b42f76634"
    "247faf0e0e0e0e0e0e0e0e0e0e0e0e0e0e0e0ec41566bfe45fe74db6baf41f1c"
    "5f769645268c6a82695e976738db4013fd33411570e3455dc8a85466cdbecb97"
    "cd8e7e2807c5a010193b6f6221e0e0a9e1d473d063c392382aefc96ad498d888"
    "2d59f8faa1ca0584a55de652f786af86d81ae51e2104dd376e3da740335090c3"
    "706e0ff4b56e42dcdb5a73820d31806caca4bdb7bec8405e8a5efe711c1c9780"
    "57a91fcfd5e500d270174d45793facd39db584e15a48ec11a32e0da4d2b605d0"
    "2004dbdca282c86a2948c0bd709861987d3e71e01b555766ed7a87ade44e5403"
    "f2d38756185aae24de559279fc56748fc2bd0f3dd52c7b6ec906373e20148c09"
    "bf2fa9725e325559949d74aaf06601ac5376e2bf6e1fa4137392fd2fc42e255c"
    "e96fd9"
);

pub(crate) const EIP8_VERSIONS: [u64; 4] = [4, 4, 56, 57];

/// Raw trailing list elements carried by `AUTH_EIP8_n` and `ACK_EIP8_n`.
pub(crate) fn eip8_rest(n: usize) -> Vec<Vec<u8>> {
    let rest: &[&[u8]] = match n {
        0 => &[],
        1 => &[&hex!("03")],
        2 => &[&hex!("03"), &hex!("c401820203")],
        _ => &[
            &hex!("01"),
            &hex!("c482616280"),
            &hex!("9c666f72776172642d636f6d70617469626c6520657874656e73696f6e"),
        ],
    };
    rest.iter().map(|item| item.to_vec()).collect()
}

pub(crate) fn auth_eip8(n: usize) -> &'static [u8] {
    match n {
        0 => &AUTH_EIP8_0,
        1 => &AUTH_EIP8_1,
        2 => &AUTH_EIP8_2,
        _ => &AUTH_EIP8_3,
    }
}

pub(crate) fn ack_eip8(n: usize) -> &'static [u8] {
    match n {
        0 => &ACK_EIP8_0,
        1 => &ACK_EIP8_1,
        2 => &ACK_EIP8_2,
        _ => &ACK_EIP8_3,
    }
}
