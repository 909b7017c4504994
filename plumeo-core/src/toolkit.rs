//! Static writing resources shown in the "Boîte à outils" popup.
//!
//! Two tabs: imagination (narrative craft) and réflexion (argumentation).
//! Pure data, no service involved.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolkitTab {
    Imagination,
    Reflexion,
}

impl ToolkitTab {
    pub fn toggle(self) -> Self {
        match self {
            ToolkitTab::Imagination => ToolkitTab::Reflexion,
            ToolkitTab::Reflexion => ToolkitTab::Imagination,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ToolkitTab::Imagination => "Imagination",
            ToolkitTab::Reflexion => "Réflexion",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ToolkitEntry {
    pub tab: ToolkitTab,
    pub title: &'static str,
    pub summary: &'static str,
    /// Detail lines shown when the entry is opened.
    pub body: &'static [&'static str],
}

macro_rules! entry {
    ($tab:ident, $title:expr, $summary:expr, [$($line:expr),* $(,)?]) => {
        ToolkitEntry {
            tab: ToolkitTab::$tab,
            title: $title,
            summary: $summary,
            body: &[$($line),*],
        }
    };
}

pub const TOOLKIT: &[ToolkitEntry] = &[
    entry!(
        Imagination,
        "Éviter les répétitions",
        "Varier son vocabulaire narratif.",
        [
            "Utilise des synonymes ou des pronoms pour désigner tes personnages :",
            "Le héros : ce jeune homme, le protagoniste, l'aventurier, celui-ci.",
            "Manger : dévorer, savourer, grignoter, se sustenter.",
        ]
    ),
    entry!(
        Imagination,
        "Décrire un lieu",
        "Ville, campagne et intérieurs.",
        [
            "La ville : effervescence, artères encombrées, façades lépreuses, bitume brûlant, néons clignotants, grouillement citadin.",
            "La campagne : paysage vallonné, atmosphère bucolique, bruissement des feuilles, horizon dégagé, senteurs terreuses, calme olympien.",
            "Les intérieurs : pièce exiguë, salon spacieux, ambiance feutrée, pénombre mystérieuse, décor dépouillé, mobilier patiné par le temps.",
            "N'oublie pas de solliciter les 5 sens : que voit-on, qu'entend-on, quelle est l'odeur du lieu ?",
        ]
    ),
    entry!(
        Imagination,
        "Décrire un humain",
        "Portrait physique et moral.",
        [
            "Portrait physique : trapu, frêle, le teint cireux, des yeux malicieux, une allure fière.",
            "Portrait moral : intrépide, mélancolique, fourbe, altruiste, taciturne.",
        ]
    ),
    entry!(
        Imagination,
        "Décrire un animal",
        "Pelages, cris et mouvements.",
        [
            "Le corps : pelage dru, plumage diapré, écailles rugueuses.",
            "Mouvement : bondir, se faufiler, planer, charger.",
            "Cris : hurlement, glapissement, sifflement.",
        ]
    ),
    entry!(
        Imagination,
        "Décrire un vêtement",
        "Matières et signes sociaux.",
        [
            "Les vêtements en disent long sur le personnage :",
            "Richesse : soie, brocard, velours, bijoux rutilants.",
            "Misère : toile rêche, haillons, étoffe élimée, souliers troués.",
        ]
    ),
    entry!(
        Imagination,
        "Le verbe 'dire'",
        "Dialogues vivants.",
        [
            "Remplace \"dit-il\" par l'intention :",
            "S'exclamer, tonner ; chuchoter, souffler ;",
            "répliquer, rétorquer ; balbutier, bégayer.",
        ]
    ),
    entry!(
        Imagination,
        "Figures de style",
        "Images et poésie.",
        [
            "Métaphore : \"Le lac était un miroir d'argent.\"",
            "Comparaison : \"Fort comme un lion.\"",
            "Personnification : \"Le vent hurlait sa douleur.\"",
        ]
    ),
    entry!(
        Imagination,
        "Expressivité",
        "Montrer au lieu de dire.",
        [
            "Au lieu de \"Il avait peur\", écris :",
            "\"Ses mains tremblaient, sa gorge était sèche et son cœur battait à se rompre.\"",
        ]
    ),
    entry!(
        Reflexion,
        "Connecteurs logiques",
        "Lier tes idées proprement.",
        [
            "Organise ton argumentation :",
            "Addition : de plus, par ailleurs, en outre.",
            "Opposition : cependant, toutefois, néanmoins.",
            "Conséquence : par conséquent, ainsi, c'est pourquoi.",
        ]
    ),
    entry!(
        Reflexion,
        "Structurer un argument",
        "La méthode I.A.E.",
        [
            "Chaque paragraphe doit suivre cet ordre :",
            "1. Idée : énonce clairement ton avis.",
            "2. Argument : explique pourquoi tu penses cela.",
            "3. Exemple : donne un exemple concret (livre, film, fait historique).",
        ]
    ),
    entry!(
        Reflexion,
        "Exprimer son opinion",
        "Au-delà du 'je pense'.",
        [
            "Utilise des verbes d'opinion variés :",
            "J'estime que... Je soutiens que...",
            "Il est indéniable que... Je déplore que...",
        ]
    ),
    entry!(
        Reflexion,
        "Nuancer son propos",
        "Ne pas être trop catégorique.",
        [
            "Utilise des modalisateurs pour montrer que tu réfléchis :",
            "peut-être, sans doute, il semble que, vraisemblablement, dans une certaine mesure...",
            "Cela montre au correcteur que tu es capable de recul.",
        ]
    ),
    entry!(
        Reflexion,
        "Réfuter un argument",
        "Répondre aux adversaires.",
        [
            "Pour contredire une idée reçue :",
            "\"Certes, certains affirment que... mais il faut aussi considérer que...\"",
            "\"Contrairement à l'idée répandue...\"",
        ]
    ),
    entry!(
        Reflexion,
        "Introduire un exemple",
        "Rendre l'idée concrète.",
        [
            "Mots pour amener tes preuves :",
            "\"notamment\", \"à titre d'illustration\", \"comme en témoigne l'œuvre de...\", \"prenons le cas de...\"",
        ]
    ),
];

/// Entries belonging to one tab, in declaration order.
pub fn entries(tab: ToolkitTab) -> impl Iterator<Item = &'static ToolkitEntry> {
    TOOLKIT.iter().filter(move |e| e.tab == tab)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_tabs_have_entries() {
        assert_eq!(entries(ToolkitTab::Imagination).count(), 8);
        assert_eq!(entries(ToolkitTab::Reflexion).count(), 6);
    }

    #[test]
    fn test_entries_are_complete() {
        for entry in TOOLKIT {
            assert!(!entry.title.is_empty());
            assert!(!entry.summary.is_empty());
            assert!(!entry.body.is_empty());
        }
    }

    #[test]
    fn test_tab_toggle() {
        assert_eq!(ToolkitTab::Imagination.toggle(), ToolkitTab::Reflexion);
        assert_eq!(ToolkitTab::Reflexion.toggle(), ToolkitTab::Imagination);
    }
}
