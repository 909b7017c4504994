//! The inspiration library: theme cards with a pedagogical example, writing
//! tips, and a small anthology of classic excerpts per theme.
//!
//! All content is static; the service can additionally be asked for a fresh
//! variant through the prompt in `export`.

/// A short passage from a classic author.
#[derive(Debug, Clone, Copy)]
pub struct Excerpt {
    pub author: &'static str,
    pub source: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct InspirationTheme {
    pub title: &'static str,
    pub desc: &'static str,
    /// House-written model text for the theme.
    pub example: &'static str,
    pub tips: &'static [&'static str],
    pub library: &'static [Excerpt],
}

impl InspirationTheme {
    /// Text and attribution for one reading position: `None` is the
    /// pedagogical example, `Some(i)` indexes the anthology.
    pub fn passage(&self, excerpt: Option<usize>) -> (&'static str, &'static str, &'static str) {
        match excerpt.and_then(|i| self.library.get(i)) {
            Some(e) => (e.text, e.author, e.source),
            None => (self.example, "Pluméo", "Exemple Pédagogique"),
        }
    }
}

pub const THEMES: &[InspirationTheme] = &[
    InspirationTheme {
        title: "Textes d'Amour",
        desc: "Passion, sentiments et lyrisme.",
        example: "Ton regard est un océan où mon âme vient se perdre. Chaque battement de mon cœur résonne comme un vers de poésie dédié à ta grâce. Même le silence, entre nous, semble chargé d'une musique que nous seuls pouvons entendre, un lien invisible qui défie le temps et l'absence.",
        tips: &[
            "Utilise le champ lexical des sens (vue, ouïe, toucher).",
            "Emploie des métaphores pour exprimer l'invisible.",
            "Soigne le rythme des phrases pour créer une mélodie.",
        ],
        library: &[
            Excerpt {
                author: "Victor Hugo",
                source: "Les Contemplations",
                text: "Demain, dès l'aube, à l'heure où blanchit la campagne, / Je partirai. Vois-tu, je sais que tu m'attends. / J'irai par la forêt, j'irai par la montagne. / Je ne puis demeurer loin de toi plus longtemps.",
            },
            Excerpt {
                author: "Edmond Rostand",
                source: "Cyrano de Bergerac",
                text: "Un baiser, mais à tout prendre, qu'est-ce ? / Un serment fait d'un peu plus près, une promesse / Plus précise, un aveu qui veut se confirmer, / Un point rose qu'on met sur l'i du mot aimer.",
            },
        ],
    },
    InspirationTheme {
        title: "Fantastique",
        desc: "Surnaturel et mystère.",
        example: "L'horloge du salon sonna treize coups. Un frisson parcourut l'échine de Paul. À travers la vitre givrée, il vit une ombre se détacher de la brume, une silhouette sans visage qui semblait flotter au-dessus du sol. La serrure de la porte grinça doucement, alors qu'aucune clé ne s'y trouvait.",
        tips: &[
            "Installe le doute : est-ce réel ou une illusion ?",
            "Utilise des adjectifs liés à l'inquiétude.",
            "Précise les bruits et les jeux d'ombre.",
        ],
        library: &[
            Excerpt {
                author: "Guy de Maupassant",
                source: "Le Horla",
                text: "Je n'ai plus la force de vouloir ; je l'ai, cette volonté, mais quelqu'un s'en empare et la dirige ! Elle ne m'appartient plus. Je ne suis plus rien qu'un spectateur esclave et terrifié de toutes les choses que je fais.",
            },
            Excerpt {
                author: "Théophile Gautier",
                source: "La Cafetière",
                text: "Tout à coup, le feu prit une étrange couleur bleue ; les bougies s'allongèrent en jetant une lumière blafarde, et je vis avec effroi que les personnages des tapisseries commençaient à s'agiter.",
            },
        ],
    },
    InspirationTheme {
        title: "Science-Fiction",
        desc: "Futur, robots et voyages spatiaux.",
        example: "Le chrome des gratte-ciels de Néo-Paris étincelait sous l'éclat des trois lunes artificielles. Le cyborg XJ-9 ajusta ses capteurs optiques ; il percevait le flux d'informations des voitures volantes comme une pluie de chiffres bleutés. Dans ce monde de métal, il cherchait désespérément un souvenir humain.",
        tips: &[
            "Invente des mots pour de nouvelles technologies.",
            "Crée un décor radicalement différent du nôtre.",
            "Interroge la place de l'homme face aux machines.",
        ],
        library: &[
            Excerpt {
                author: "Jules Verne",
                source: "Vingt mille lieues sous les mers",
                text: "La mer est tout ! Elle couvre les sept dixièmes du globe terrestre. Son souffle est pur et sain. C'est l'immense désert où l'homme n'est jamais seul, car il sent frémir la vie à ses côtés.",
            },
            Excerpt {
                author: "René Barjavel",
                source: "La Nuit des temps",
                text: "Ils étaient là, sous la glace, depuis neuf cent mille ans. L'homme et la femme, immobiles, parfaits, attendant que le monde se souvienne d'eux.",
            },
        ],
    },
    InspirationTheme {
        title: "Argumentatif",
        desc: "Défendre une idée avec brio.",
        example: "Il est impératif de protéger notre environnement, car la Terre n'est pas un héritage de nos ancêtres, mais un prêt de nos enfants. Premièrement, la biodiversité assure notre survie. Deuxièmement, le dérèglement climatique menace la paix mondiale. Enfin, il en va de notre responsabilité morale.",
        tips: &[
            "Utilise des connecteurs logiques (premièrement, enfin).",
            "Appuie-toi sur des valeurs universelles.",
            "Conclue par une ouverture ou une question forte.",
        ],
        library: &[
            Excerpt {
                author: "Montesquieu",
                source: "De l'Esprit des Lois",
                text: "La liberté est le droit de faire tout ce que les lois permettent ; et si un citoyen pouvait faire ce qu'elles défendent, il n'aurait plus de liberté, parce que les autres auraient tout de même ce pouvoir.",
            },
            Excerpt {
                author: "Voltaire",
                source: "Traité sur la tolérance",
                text: "La tolérance n'a jamais excité de guerre civile ; l'intolérance a couvert la terre de carnage.",
            },
        ],
    },
    InspirationTheme {
        title: "Descriptions",
        desc: "Peindre des paysages avec les mots.",
        example: "La forêt exhalait une odeur de mousse humide et de résine sauvage. Les rayons du soleil, filtrés par la voûte d'émeraude des chênes, dessinaient sur le sol un tapis de lumière mouvante. Un ruisseau, aux eaux si claires qu'on y voyait briller chaque galet, chantait une chanson cristalline.",
        tips: &[
            "Ordonne ta description (du général au particulier).",
            "Choisis des adjectifs de couleur très précis.",
            "Évoque les textures et les odeurs.",
        ],
        library: &[
            Excerpt {
                author: "Gustave Flaubert",
                source: "Madame Bovary",
                text: "C'était une de ces coiffures d'ordre composite, où l'on retrouve les éléments du bonnet à poil, du chapska, du chapeau rond, de la casquette de loutre et du bonnet de coton...",
            },
            Excerpt {
                author: "Émile Zola",
                source: "Le Ventre de Paris",
                text: "C'était une mer de légumes, les Halles s'éveillaient dans un balancement de lanternes, au milieu des cris des charretiers et du craquement des fouets.",
            },
        ],
    },
    InspirationTheme {
        title: "Réalisme",
        desc: "La vie quotidienne brute.",
        example: "Le vieil homme posa son journal froissé sur la nappe en plastique tachée de café. Dehors, la pluie fine frappait les carreaux avec une régularité lassante. Dans la cuisine, le ronronnement du vieux frigo était le seul bruit qui l'accompagnait dans sa routine silencieuse et immuable.",
        tips: &[
            "Décris des objets banals pour créer du vrai.",
            "Utilise des verbes d'action ordinaires.",
            "Évite les fioritures poétiques trop marquées.",
        ],
        library: &[
            Excerpt {
                author: "Honoré de Balzac",
                source: "Le Père Goriot",
                text: "La façade de la pension donne sur un jardinet, en sorte que la maison tombe à angle droit sur la rue Neuve-Sainte-Geneviève, où vous la voyez coupée dans sa profondeur.",
            },
            Excerpt {
                author: "Guy de Maupassant",
                source: "Une Vie",
                text: "Jeanne, ayant fini ses malles, s'approcha de la fenêtre, mais la pluie ne cessait pas.",
            },
        ],
    },
    InspirationTheme {
        title: "Dialogues",
        desc: "Faire parler ses personnages.",
        example: "— Tu as encore oublié la clé, n'est-ce pas ? soupira Clara.\n— Pas du tout, elle est... là, balbutia-t-il en tapotant ses poches.\n— Je déteste quand tu fais ça. On va rester coincés ici toute la nuit !\n— Calme-toi, je vais bien finir par la retrouver.",
        tips: &[
            "Varie les verbes de parole (soupira, balbutia).",
            "Adapte le niveau de langue au personnage.",
            "Mêle des gestes aux paroles pour donner de la vie.",
        ],
        library: &[
            Excerpt {
                author: "Molière",
                source: "L'Avare",
                text: "— Au voleur ! au voleur ! à l'assassin ! au meurtrier ! Justice, juste Ciel ! je suis perdu, je suis assassiné, on m'a coupé la gorge, on m'a dérobé mon argent !",
            },
            Excerpt {
                author: "Alfred de Musset",
                source: "On ne badine pas avec l'amour",
                text: "— Adieu, Camille, retourne à ton couvent, et lorsqu'on te fera de ces récits hideux qui t'ont empoisonnée, réponds ce que je vais te dire : Tous les hommes sont menteurs, inconstants, faux...",
            },
        ],
    },
    InspirationTheme {
        title: "Discours Célèbres",
        desc: "Éloquence et persuasion.",
        example: "Citoyens, l'heure n'est plus aux doutes, elle est au courage ! Nous sommes les héritiers d'une histoire glorieuse, les gardiens d'une liberté chèrement acquise. Que notre voix s'élève comme un seul cri pour affirmer notre volonté de construire, ensemble, un avenir de fraternité et de justice !",
        tips: &[
            "Utilise des questions oratoires pour impliquer l'auditeur.",
            "Emploie l'anaphore (répétition en début de phrase).",
            "Appelle à l'émotion et aux valeurs communes.",
        ],
        library: &[
            Excerpt {
                author: "Charles de Gaulle",
                source: "Appel du 18 juin",
                text: "Quoi qu'il arrive, la flamme de la résistance française ne doit pas s'éteindre et ne s'éteindra pas.",
            },
            Excerpt {
                author: "André Malraux",
                source: "Transfert des cendres de Jean Moulin",
                text: "Entre ici, Jean Moulin, avec ton cortège d'ombres ! Avec ceux qui sont morts dans les caves sans avoir parlé, comme toi ; et même, ce qui est peut-être plus atroce, en ayant parlé...",
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_theme_is_complete() {
        assert_eq!(THEMES.len(), 8);
        for theme in THEMES {
            assert!(!theme.example.is_empty());
            assert_eq!(theme.tips.len(), 3);
            assert_eq!(theme.library.len(), 2);
        }
    }

    #[test]
    fn test_passage_selects_example_or_excerpt() {
        let theme = &THEMES[0];
        let (text, author, source) = theme.passage(None);
        assert_eq!(text, theme.example);
        assert_eq!(author, "Pluméo");
        assert_eq!(source, "Exemple Pédagogique");

        let (text, author, _) = theme.passage(Some(0));
        assert_eq!(author, "Victor Hugo");
        assert!(text.starts_with("Demain, dès l'aube"));

        // Out-of-range falls back to the example
        assert_eq!(theme.passage(Some(9)).1, "Pluméo");
    }
}
