//! Grading rubrics and prompt construction.
//!
//! Each competency has a Portuguese-language rubric describing its
//! criteria. The full instruction sent to the model is the rubric, the
//! theme where the rubric grades against it, and the scoring directions
//! with the mandatory response marker. The essay itself travels as the
//! user message, not inside the instruction.

use corretor_core::Competency;

const FORMAL_WRITING: &str = "\
Analise a redação com base na capacidade do candidato de usar corretamente a modalidade formal da língua portuguesa.
Observe principalmente: gramática, ortografia, pontuação, coerência gramatical e vocabulário adequado.
Erros diminuem a pontuação conforme a gravidade; muitos erros ou linguagem muito informal perdem mais pontos.
O ideal é que a redação seja clara, objetiva e gramaticalmente correta.";

const COMPREHENSION: &str = "\
Analise a redação com base na capacidade do candidato de compreender a proposta de redação e aplicar conceitos das várias áreas de conhecimento para desenvolver o tema, respeitando os limites estruturais do texto dissertativo-argumentativo em prosa.
O candidato precisa demonstrar que entendeu o tema proposto e que sabe utilizar conteúdos de diversas disciplinas para elaborar uma argumentação coerente e bem fundamentada, dentro do formato exigido.";

const ARGUMENT_ORGANIZATION: &str = "\
Avalie a capacidade do candidato de construir e sustentar uma argumentação coerente e bem fundamentada em seu texto dissertativo-argumentativo.
Para isso, é necessário interpretar corretamente as informações e selecionar dados relevantes, organizando-os de forma a defender uma ideia ou ponto de vista.";

const ARGUMENTATION_MECHANISMS: &str = "\
Avalie o texto com base na demonstração de conhecimento dos mecanismos linguísticos necessários para a construção da argumentação.
O candidato deve usar os recursos linguísticos (coesão, coerência, conectores e outros elementos de organização textual) de forma adequada para estruturar suas ideias e argumentos, promovendo clareza e fluidez na escrita.";

const INTERVENTION_PROPOSAL: &str = "\
Avalie a forma como o candidato apresenta uma solução viável e detalhada para o problema discutido em seu texto dissertativo-argumentativo, considerando princípios como inclusão social, igualdade e respeito à dignidade humana.
A proposta de intervenção deve ser clara e estar relacionada com o tema central da redação.";

fn rubric(competency: Competency) -> &'static str {
    match competency {
        Competency::FormalWriting => FORMAL_WRITING,
        Competency::Comprehension => COMPREHENSION,
        Competency::ArgumentOrganization => ARGUMENT_ORGANIZATION,
        Competency::ArgumentationMechanisms => ARGUMENTATION_MECHANISMS,
        Competency::InterventionProposal => INTERVENTION_PROPOSAL,
    }
}

/// Builds the full instruction for one competency. The theme is only
/// interpolated where the rubric grades against it.
pub(crate) fn instructions(competency: Competency, theme: &str) -> String {
    let mut text = String::from(rubric(competency));
    if competency.needs_theme() {
        text.push_str("\nO tema proposto da redação é: ");
        text.push_str(theme);
        text.push('.');
    }
    text.push_str(&format!(
        "\nForneça uma pontuação de 0 a 200.\n\
         Explique sua linha de raciocínio antes de calcular a nota.\n\
         Sua resposta deve começar com 'Pontuação - Competência {}: ' seguida da pontuação numérica.",
        competency.ordinal()
    ));
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_interpolated_only_where_required() {
        for competency in Competency::ALL {
            let text = instructions(competency, "trabalho infantil");
            assert_eq!(
                text.contains("trabalho infantil"),
                competency.needs_theme(),
                "{:?}",
                competency
            );
        }
    }

    #[test]
    fn marker_instruction_carries_the_ordinal() {
        for competency in Competency::ALL {
            let text = instructions(competency, "tema");
            let expected = format!(
                "'Pontuação - Competência {}: '",
                competency.ordinal()
            );
            assert!(text.contains(&expected));
        }
    }

    #[test]
    fn score_range_stated_in_every_rubric() {
        for competency in Competency::ALL {
            assert!(instructions(competency, "tema").contains("de 0 a 200"));
        }
    }
}
