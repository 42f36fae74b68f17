use crate::phoneinfo::enums::Carrier;

/// Dialing prefix to country label. Order here does not matter for lookups,
/// the table is re-sorted longest prefix first when the util is built.
pub const COUNTRY_PREFIXES: &[(&str, &str)] = &[
    ("+55", "Brasil"),
    ("+1", "Estados Unidos/Canadá"),
    ("+44", "Reino Unido"),
    ("+49", "Alemanha"),
    ("+33", "França"),
    ("+34", "Espanha"),
    ("+39", "Itália"),
    ("+81", "Japão"),
    ("+86", "China"),
    ("+7", "Rússia"),
    ("+91", "Índia"),
    ("+54", "Argentina"),
    ("+52", "México"),
    ("+51", "Peru"),
    ("+56", "Chile"),
    ("+57", "Colômbia"),
    ("+58", "Venezuela"),
    ("+61", "Austrália"),
    ("+64", "Nova Zelândia"),
    ("+27", "África do Sul"),
    ("+20", "Egito"),
    ("+90", "Turquia"),
    ("+82", "Coreia do Sul"),
    ("+65", "Singapura"),
];

/// Brazilian DDD to the main city of the region.
pub const AREA_CODES: &[(&str, &str)] = &[
    // Southeast
    ("11", "São Paulo/SP"),
    ("12", "São José dos Campos/SP"),
    ("13", "Santos/SP"),
    ("14", "Bauru/SP"),
    ("15", "Sorocaba/SP"),
    ("16", "Ribeirão Preto/SP"),
    ("17", "São José do Rio Preto/SP"),
    ("18", "Presidente Prudente/SP"),
    ("19", "Campinas/SP"),
    ("21", "Rio de Janeiro/RJ"),
    ("22", "Campos dos Goytacazes/RJ"),
    ("24", "Volta Redonda/RJ"),
    ("27", "Vitória/ES"),
    ("28", "Cachoeiro de Itapemirim/ES"),
    ("31", "Belo Horizonte/MG"),
    ("32", "Juiz de Fora/MG"),
    ("33", "Governador Valadares/MG"),
    ("34", "Uberlândia/MG"),
    ("35", "Poços de Caldas/MG"),
    ("37", "Divinópolis/MG"),
    ("38", "Montes Claros/MG"),
    // South
    ("41", "Curitiba/PR"),
    ("42", "Ponta Grossa/PR"),
    ("43", "Londrina/PR"),
    ("44", "Maringá/PR"),
    ("45", "Foz do Iguaçu/PR"),
    ("46", "Francisco Beltrão/PR"),
    ("47", "Joinville/SC"),
    ("48", "Florianópolis/SC"),
    ("49", "Chapecó/SC"),
    ("51", "Porto Alegre/RS"),
    ("53", "Pelotas/RS"),
    ("54", "Caxias do Sul/RS"),
    ("55", "Santa Maria/RS"),
    // Center-west and north
    ("61", "Brasília/DF"),
    ("62", "Goiânia/GO"),
    ("63", "Palmas/TO"),
    ("64", "Rio Verde/GO"),
    ("65", "Cuiabá/MT"),
    ("66", "Rondonópolis/MT"),
    ("67", "Campo Grande/MS"),
    ("68", "Rio Branco/AC"),
    ("69", "Porto Velho/RO"),
    // Northeast
    ("71", "Salvador/BA"),
    ("73", "Ilhéus/BA"),
    ("74", "Juazeiro/BA"),
    ("75", "Feira de Santana/BA"),
    ("77", "Vitória da Conquista/BA"),
    ("79", "Aracaju/SE"),
    ("81", "Recife/PE"),
    ("82", "Maceió/AL"),
    ("83", "João Pessoa/PB"),
    ("84", "Natal/RN"),
    ("85", "Fortaleza/CE"),
    ("86", "Teresina/PI"),
    ("87", "Petrolina/PE"),
    ("88", "Juazeiro do Norte/CE"),
    ("89", "Picos/PI"),
    ("91", "Belém/PA"),
    ("92", "Manaus/AM"),
    ("93", "Santarém/PA"),
    ("94", "Marabá/PA"),
    ("95", "Boa Vista/RR"),
    ("96", "Macapá/AP"),
    ("97", "Coari/AM"),
    ("98", "São Luís/MA"),
    ("99", "Imperatriz/MA"),
];

/// Historical prefix blocks per carrier. The sets are disjoint and are
/// checked in this order.
pub const CARRIER_PREFIXES: &[(Carrier, &[&str])] = &[
    (Carrier::Vivo, &["15", "25", "95", "96", "97", "98", "99"]),
    (
        Carrier::Claro,
        &["21", "22", "23", "24", "31", "32", "33", "34", "35", "36", "37", "38"],
    ),
    (
        Carrier::Tim,
        &["41", "42", "43", "44", "45", "46", "47", "48", "49", "91", "92", "93", "94"],
    ),
    (Carrier::Oi, &["81", "82", "83", "84", "85", "86", "87", "88", "89"]),
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{AREA_CODES, CARRIER_PREFIXES, COUNTRY_PREFIXES};

    #[test]
    fn carrier_sets_are_disjoint() {
        let mut seen = HashSet::new();
        for (carrier, prefixes) in CARRIER_PREFIXES {
            for prefix in *prefixes {
                assert_eq!(prefix.len(), 2, "{carrier}: {prefix}");
                assert!(seen.insert(*prefix), "{prefix} is listed twice");
            }
        }
    }

    #[test]
    fn area_codes_are_unique_two_digit_codes() {
        let codes: HashSet<_> = AREA_CODES.iter().map(|(code, _)| *code).collect();
        assert_eq!(codes.len(), AREA_CODES.len());
        assert_eq!(AREA_CODES.len(), 67);
        assert!(codes.iter().all(|code| code.len() == 2 && code.bytes().all(|b| b.is_ascii_digit())));
    }

    #[test]
    fn country_prefixes_are_well_formed() {
        let prefixes: HashSet<_> = COUNTRY_PREFIXES.iter().map(|(prefix, _)| *prefix).collect();
        assert_eq!(prefixes.len(), COUNTRY_PREFIXES.len());
        assert_eq!(COUNTRY_PREFIXES.len(), 24);
        for prefix in prefixes {
            assert!(prefix.starts_with('+'));
            assert!(prefix[1..].bytes().all(|b| b.is_ascii_digit()));
        }
    }
}
